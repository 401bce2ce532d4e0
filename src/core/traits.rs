use crate::core::data::ReminderCollection;
use crate::utils::error::AppResult;

/// Persistence backend for the reminder list
pub trait ReminderStorage {
    /// Create an empty store if none exists yet
    fn ensure_exists(&self) -> AppResult<()>;

    /// Load the reminder list; a missing or blank store is an empty list
    fn load(&self) -> AppResult<ReminderCollection>;

    /// Replace the stored list
    fn save(&self, collection: &ReminderCollection) -> AppResult<()>;

    /// Empty the store
    fn reset(&self) -> AppResult<()>;

    /// Copy the store aside, returning the number of reminders saved
    fn backup(&self) -> AppResult<usize>;

    /// Bring back the last backup, returning the number of reminders restored
    fn restore(&self) -> AppResult<usize>;
}
