//! Alertify - a command-line reminder manager
//!
//! Reminders live in a JSON file as an ordered array. Each one has an id,
//! text, an optional due date, a priority and a status. The library exposes
//! the storage backend, the reminder operations and the CLI plumbing used by
//! the `alertify` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{Priority, Reminder, ReminderCollection, Status},
    operations::{Listing, ReminderOperations, ReminderUpdate},
    traits::ReminderStorage,
};
pub use storage::JsonStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
