use colored::*;
use crate::core::operations::{ListedReminder, Listing};
use crate::core::data::Reminder;
use crate::utils::error::{handle_flow, FlowResult};
use crate::utils::format::format_due;

pub struct OutputStyle;

impl OutputStyle {
    pub fn banner(text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn overdue(text: &str) -> ColoredString {
        text.red()
    }

    pub fn pending(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "=".repeat(30)
    }

    pub fn print_header() {
        println!("{}", Self::banner(&Self::header_separator()));
        println!("{}", Self::banner(&format!("{:^30}", "Reminders")));
        println!("{}", Self::banner(&Self::header_separator()));
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>18}: {}", Self::label(label), value);
    }

    /// `NN. TEXT (Due: DUE, Priority: P, Status: S)`
    pub fn format_reminder_line(serial: usize, reminder: &Reminder) -> String {
        format!(
            "{:02}. {} (Due: {}, Priority: {}, Status: {})",
            serial,
            reminder.text,
            format_due(&reminder.due),
            reminder.priority,
            reminder.status
        )
    }

    pub fn print_listed(listed: &ListedReminder) {
        let line = Self::format_reminder_line(listed.serial, &listed.reminder);
        if listed.overdue {
            println!("{}", Self::overdue(&line));
        } else {
            println!("{}", Self::pending(&line));
        }
    }
}

pub fn print_listing(listing: &Listing) {
    if listing.purged > 0 {
        handle_flow(FlowResult::Purged(listing.purged));
    }

    if listing.reminders.is_empty() {
        handle_flow(FlowResult::EmptyList);
        return;
    }

    for listed in &listing.reminders {
        OutputStyle::print_listed(listed);
    }
}

pub fn print_success(message: &str) {
    handle_flow(FlowResult::Success(message.to_string()));
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

/// Apply the configured colour preference to all styled output
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{Priority, Status};
    use chrono::NaiveDate;

    #[test]
    fn test_reminder_line_layout() {
        let mut reminder = Reminder::new("Dentist".to_string(), None, Priority::High);
        assert_eq!(
            OutputStyle::format_reminder_line(3, &reminder),
            "03. Dentist (Due: N/A, Priority: High, Status: Pending)"
        );

        reminder.due = NaiveDate::from_ymd_opt(2024, 11, 5);
        reminder.status = Status::Overdue;
        assert_eq!(
            OutputStyle::format_reminder_line(12, &reminder),
            "12. Dentist (Due: 2024-11-05, Priority: High, Status: Overdue)"
        );
    }
}
