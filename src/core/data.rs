use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::format::{deserialize_due, serialize_due};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Status {
    #[default]
    Pending,
    Completed,
    Overdue,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("invalid priority '{}', expected Low, Medium or High", other)),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "completed" => Ok(Status::Completed),
            "overdue" => Ok(Status::Overdue),
            other => Err(format!(
                "invalid status '{}', expected Pending, Completed or Overdue",
                other
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Pending => "Pending",
            Status::Completed => "Completed",
            Status::Overdue => "Overdue",
        };
        f.write_str(s)
    }
}

// Stores written by hand may use any casing
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "reminder")]
    pub text: String,
    #[serde(
        default,
        serialize_with = "serialize_due",
        deserialize_with = "deserialize_due"
    )]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

impl Reminder {
    pub fn new(text: String, due: Option<NaiveDate>, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            due,
            priority,
            status: Status::Pending,
        }
    }

    /// Overdue when explicitly marked so, or still pending past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            Status::Overdue => true,
            Status::Pending => self.due.is_some_and(|due| due < today),
            Status::Completed => false,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }
}

/// Ordered reminder list; serial numbers are 1-based positions in it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderCollection {
    pub reminders: Vec<Reminder>,
}

impl ReminderCollection {
    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Map a serial number onto a vector index
    pub fn index_of(&self, serial: usize) -> Option<usize> {
        if serial == 0 || serial > self.reminders.len() {
            None
        } else {
            Some(serial - 1)
        }
    }

    pub fn get_mut(&mut self, serial: usize) -> Option<&mut Reminder> {
        let index = self.index_of(serial)?;
        self.reminders.get_mut(index)
    }

    /// Give every reminder without an id a fresh one, returning how many were fixed
    pub fn assign_missing_ids(&mut self) -> usize {
        let mut fixed = 0;
        for reminder in self.reminders.iter_mut().filter(|r| r.id.trim().is_empty()) {
            reminder.id = Uuid::new_v4().to_string();
            fixed += 1;
        }
        fixed
    }

    /// Drop completed reminders, returning how many were removed
    pub fn purge_completed(&mut self) -> usize {
        let before = self.reminders.len();
        self.reminders.retain(|r| !r.is_completed());
        before - self.reminders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_reminder_defaults() {
        let reminder = Reminder::new("Pay rent".to_string(), None, Priority::High);
        assert_eq!(reminder.status, Status::Pending);
        assert_eq!(reminder.priority, Priority::High);
        assert!(Uuid::parse_str(&reminder.id).is_ok());
        assert_eq!(reminder.id, reminder.id.to_lowercase());
    }

    #[test]
    fn test_overdue_rules() {
        let today = date(2024, 6, 15);
        let mut reminder = Reminder::new("x".to_string(), Some(date(2024, 6, 14)), Priority::Low);
        assert!(reminder.is_overdue(today));

        reminder.due = Some(today);
        assert!(!reminder.is_overdue(today));

        reminder.due = None;
        assert!(!reminder.is_overdue(today));

        reminder.status = Status::Overdue;
        assert!(reminder.is_overdue(today));

        reminder.status = Status::Completed;
        reminder.due = Some(date(2020, 1, 1));
        assert!(!reminder.is_overdue(today));
    }

    #[test]
    fn test_parse_priority_and_status_case_insensitive() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("completed".parse::<Status>().unwrap(), Status::Completed);
        assert!("urgent".parse::<Priority>().is_err());
        assert!("done".parse::<Status>().is_err());
    }

    #[test]
    fn test_json_layout_matches_store_format() {
        let reminder = Reminder {
            id: "0b7c5c1e-7d4e-4d8e-9a53-2f1f4c1f7f10".to_string(),
            text: "Call mom".to_string(),
            due: None,
            priority: Priority::Medium,
            status: Status::Pending,
        };
        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["reminder"], "Call mom");
        assert_eq!(value["due"], "N/A");
        assert_eq!(value["priority"], "Medium");
        assert_eq!(value["status"], "Pending");
    }

    #[test]
    fn test_reads_legacy_entries() {
        let json = r#"[
            {"reminder": "Old one", "due": "2023-01-05", "priority": "high", "status": "pending"},
            {"id": "", "reminder": "No due", "due": "N/A", "priority": "Low", "status": "Completed"}
        ]"#;
        let mut collection: ReminderCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.reminders[0].due, Some(date(2023, 1, 5)));
        assert_eq!(collection.reminders[0].priority, Priority::High);
        assert_eq!(collection.reminders[1].due, None);

        assert_eq!(collection.assign_missing_ids(), 2);
        assert!(collection.reminders.iter().all(|r| !r.id.is_empty()));
    }

    #[test]
    fn test_serial_lookup_and_purge() {
        let mut collection = ReminderCollection::default();
        for text in ["a", "b", "c"] {
            collection
                .reminders
                .push(Reminder::new(text.to_string(), None, Priority::Medium));
        }
        assert_eq!(collection.index_of(0), None);
        assert_eq!(collection.index_of(1), Some(0));
        assert_eq!(collection.index_of(3), Some(2));
        assert_eq!(collection.index_of(4), None);

        collection.get_mut(1).unwrap().status = Status::Completed;
        collection.get_mut(3).unwrap().status = Status::Completed;
        assert_eq!(collection.purge_completed(), 2);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.reminders[0].text, "b");
    }
}
