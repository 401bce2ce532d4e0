use chrono::NaiveDate;
use tracing::{debug, info};

use crate::core::data::{Priority, Reminder, Status};
use crate::core::traits::ReminderStorage;
use crate::utils::error::{AppError, AppResult};

/// A reminder as shown in a listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListedReminder {
    pub serial: usize,
    pub overdue: bool,
    pub reminder: Reminder,
}

/// Result of listing: active reminders plus how many completed ones were cleared
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub reminders: Vec<ListedReminder>,
    pub purged: usize,
}

/// Field changes for an update; `None` leaves a field untouched
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReminderUpdate {
    pub due: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
}

impl ReminderUpdate {
    pub fn is_empty(&self) -> bool {
        self.due.is_none() && self.priority.is_none()
    }
}

/// Reminder operations over any storage backend.
///
/// Every mutating call is a full load-modify-save cycle.
pub struct ReminderOperations<S: ReminderStorage> {
    storage: S,
}

impl<S: ReminderStorage> ReminderOperations<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add(&self, text: &str, due: Option<NaiveDate>, priority: Priority) -> AppResult<Reminder> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput("Reminder text cannot be empty".to_string()));
        }

        let mut collection = self.storage.load()?;
        let reminder = Reminder::new(text.to_string(), due, priority);
        collection.reminders.push(reminder.clone());
        self.storage.save(&collection)?;

        info!(id = %reminder.id, "reminder added");
        Ok(reminder)
    }

    pub fn update(&self, serial: usize, update: ReminderUpdate) -> AppResult<Reminder> {
        if update.is_empty() {
            return Err(AppError::InvalidInput(
                "Nothing to update: give --due and/or --priority".to_string(),
            ));
        }

        let mut collection = self.storage.load()?;
        let reminder = collection
            .get_mut(serial)
            .ok_or(AppError::NotFound { serial })?;

        if let Some(due) = update.due {
            reminder.due = due;
        }
        if let Some(priority) = update.priority {
            reminder.priority = priority;
        }

        let updated = reminder.clone();
        self.storage.save(&collection)?;

        info!(serial, id = %updated.id, "reminder updated");
        Ok(updated)
    }

    pub fn set_status(&self, serial: usize, status: Status) -> AppResult<Reminder> {
        let mut collection = self.storage.load()?;
        let reminder = collection
            .get_mut(serial)
            .ok_or(AppError::NotFound { serial })?;

        reminder.status = status;
        let updated = reminder.clone();
        self.storage.save(&collection)?;

        info!(serial, %status, "reminder status changed");
        Ok(updated)
    }

    pub fn remove(&self, serial: usize) -> AppResult<Reminder> {
        let mut collection = self.storage.load()?;
        let index = collection
            .index_of(serial)
            .ok_or(AppError::NotFound { serial })?;

        let removed = collection.reminders.remove(index);
        self.storage.save(&collection)?;

        info!(serial, id = %removed.id, "reminder removed");
        Ok(removed)
    }

    /// Clear completed reminders and return the rest, numbered by serial.
    ///
    /// The store is only rewritten when something was cleared.
    pub fn list(&self, today: NaiveDate) -> AppResult<Listing> {
        let mut collection = self.storage.load()?;
        let purged = collection.purge_completed();
        if purged > 0 {
            self.storage.save(&collection)?;
            debug!(purged, "cleared completed reminders");
        }

        let reminders = collection
            .reminders
            .into_iter()
            .enumerate()
            .map(|(i, reminder)| ListedReminder {
                serial: i + 1,
                overdue: reminder.is_overdue(today),
                reminder,
            })
            .collect();

        Ok(Listing { reminders, purged })
    }

    pub fn reset(&self) -> AppResult<()> {
        self.storage.reset()
    }

    pub fn backup(&self) -> AppResult<usize> {
        self.storage.backup()
    }

    pub fn restore(&self) -> AppResult<usize> {
        self.storage.restore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::ReminderCollection;
    use std::cell::{Cell, RefCell};

    /// In-memory store that counts saves
    #[derive(Default)]
    struct MemoryStorage {
        collection: RefCell<ReminderCollection>,
        saves: Cell<usize>,
    }

    impl ReminderStorage for MemoryStorage {
        fn ensure_exists(&self) -> AppResult<()> {
            Ok(())
        }

        fn load(&self) -> AppResult<ReminderCollection> {
            Ok(self.collection.borrow().clone())
        }

        fn save(&self, collection: &ReminderCollection) -> AppResult<()> {
            *self.collection.borrow_mut() = collection.clone();
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }

        fn reset(&self) -> AppResult<()> {
            *self.collection.borrow_mut() = ReminderCollection::default();
            Ok(())
        }

        fn backup(&self) -> AppResult<usize> {
            Ok(self.collection.borrow().len())
        }

        fn restore(&self) -> AppResult<usize> {
            Ok(self.collection.borrow().len())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ops_with(texts: &[&str]) -> ReminderOperations<MemoryStorage> {
        let ops = ReminderOperations::new(MemoryStorage::default());
        for text in texts {
            ops.add(text, None, Priority::Medium).unwrap();
        }
        ops
    }

    #[test]
    fn test_add_appends_pending_reminder() {
        let ops = ops_with(&["first"]);
        let added = ops
            .add("  second  ", Some(date(2024, 5, 1)), Priority::High)
            .unwrap();

        assert_eq!(added.text, "second");
        assert_eq!(added.status, Status::Pending);

        let stored = ops.storage().load().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored.reminders[1], added);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let ops = ops_with(&[]);
        assert!(matches!(ops.add("   ", None, Priority::Low), Err(AppError::InvalidInput(_))));
        assert!(ops.storage().load().unwrap().is_empty());
    }

    #[test]
    fn test_update_changes_only_given_fields() {
        let ops = ops_with(&["a", "b"]);
        let updated = ops
            .update(2, ReminderUpdate { due: Some(Some(date(2030, 1, 1))), priority: None })
            .unwrap();
        assert_eq!(updated.text, "b");
        assert_eq!(updated.due, Some(date(2030, 1, 1)));
        assert_eq!(updated.priority, Priority::Medium);

        let updated = ops
            .update(2, ReminderUpdate { due: Some(None), priority: Some(Priority::Low) })
            .unwrap();
        assert_eq!(updated.due, None);
        assert_eq!(updated.priority, Priority::Low);
    }

    #[test]
    fn test_update_requires_a_change() {
        let ops = ops_with(&["a"]);
        assert!(matches!(
            ops.update(1, ReminderUpdate::default()),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_out_of_range_serials_are_not_found() {
        let ops = ops_with(&["a", "b"]);
        let change = ReminderUpdate { due: None, priority: Some(Priority::High) };

        assert_eq!(ops.update(3, change), Err(AppError::NotFound { serial: 3 }));
        assert_eq!(ops.set_status(0, Status::Completed), Err(AppError::NotFound { serial: 0 }));
        assert_eq!(ops.remove(9).unwrap_err(), AppError::NotFound { serial: 9 });
        assert_eq!(ops.storage().load().unwrap().len(), 2);
    }

    #[test]
    fn test_remove_shifts_later_serials() {
        let ops = ops_with(&["a", "b", "c"]);
        let removed = ops.remove(2).unwrap();
        assert_eq!(removed.text, "b");

        let listing = ops.list(date(2024, 1, 1)).unwrap();
        let texts: Vec<_> = listing.reminders.iter().map(|l| l.reminder.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(listing.reminders[1].serial, 2);
    }

    #[test]
    fn test_list_purges_completed_and_renumbers() {
        let ops = ops_with(&["a", "b", "c", "d"]);
        ops.set_status(1, Status::Completed).unwrap();
        ops.set_status(2, Status::Completed).unwrap();

        let listing = ops.list(date(2024, 1, 1)).unwrap();
        assert_eq!(listing.purged, 2);
        let shown: Vec<_> = listing
            .reminders
            .iter()
            .map(|l| (l.serial, l.reminder.text.as_str()))
            .collect();
        assert_eq!(shown, vec![(1, "c"), (2, "d")]);
        assert_eq!(ops.storage().load().unwrap().len(), 2);
    }

    #[test]
    fn test_list_without_completed_does_not_save() {
        let ops = ops_with(&["a"]);
        let saves = ops.storage().saves.get();

        let listing = ops.list(date(2024, 1, 1)).unwrap();
        assert_eq!(listing.purged, 0);
        assert_eq!(ops.storage().saves.get(), saves);
    }

    #[test]
    fn test_list_flags_overdue() {
        let ops = ops_with(&[]);
        ops.add("late", Some(date(2024, 1, 1)), Priority::High).unwrap();
        ops.add("today", Some(date(2024, 1, 2)), Priority::High).unwrap();
        ops.add("undated", None, Priority::Low).unwrap();
        ops.add("marked", None, Priority::Low).unwrap();
        ops.set_status(4, Status::Overdue).unwrap();

        let listing = ops.list(date(2024, 1, 2)).unwrap();
        let flags: Vec<_> = listing.reminders.iter().map(|l| l.overdue).collect();
        assert_eq!(flags, vec![true, false, false, true]);
    }

    #[test]
    fn test_empty_listing() {
        let ops = ops_with(&[]);
        assert_eq!(ops.list(date(2024, 1, 1)).unwrap(), Listing::default());
    }
}
