use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::cli::Action;
use crate::config::Config;
use crate::core::data::Priority;
use crate::core::operations::ReminderOperations;
use crate::core::traits::ReminderStorage;
use crate::storage::JsonStorage;
use crate::utils::{print_listing, print_success};

/// Run a planned reminder invocation against the configured store
pub fn handle_reminder_command(config: &Config, actions: &[Action]) -> Result<()> {
    let storage = JsonStorage::from_config(config);
    storage.ensure_exists()?;

    let ops = ReminderOperations::new(storage);
    let today = Local::now().date_naive();
    run_actions(&ops, actions, config.general.default_priority, today)
}

/// Execute actions in order, stopping at the first failure
pub fn run_actions<S: ReminderStorage>(
    ops: &ReminderOperations<S>,
    actions: &[Action],
    default_priority: Priority,
    today: NaiveDate,
) -> Result<()> {
    for action in actions {
        match action {
            Action::Add { text, due, priority } => {
                let reminder = ops.add(text, *due, priority.unwrap_or(default_priority))?;
                print_success(&format!("Reminder added: {}", reminder.text));
            }
            Action::Update { serial, update } => {
                ops.update(*serial, *update)?;
                print_success(&format!("Reminder {} updated.", serial));
            }
            Action::SetStatus { serial, status } => {
                ops.set_status(*serial, *status)?;
                print_success(&format!("Status of reminder {} set to {}.", serial, status));
            }
            Action::Remove { serial } => {
                let removed = ops.remove(*serial)?;
                print_success(&format!("Reminder {} removed: {}", serial, removed.text));
            }
            Action::List => {
                let listing = ops.list(today)?;
                print_listing(&listing);
            }
            Action::Reset => {
                ops.reset()?;
                print_success("Reminders file reset successfully.");
            }
            Action::Backup => {
                let count = ops.backup()?;
                print_success(&format!("Backup successful ({} reminders).", count));
            }
            Action::Restore => {
                let count = ops.restore()?;
                print_success(&format!("Restore successful ({} reminders).", count));
            }
        }
    }

    Ok(())
}
