// Core abstractions and data structures
pub mod data;
pub mod operations;
pub mod traits;

pub use data::{Priority, Reminder, ReminderCollection, Status};
pub use operations::{ListedReminder, Listing, ReminderOperations, ReminderUpdate};
pub use traits::ReminderStorage;
