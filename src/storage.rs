use crate::config::Config;
use crate::core::data::ReminderCollection;
use crate::core::traits::ReminderStorage;
use crate::utils::error::{AppError, AppResult};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const EMPTY_STORE: &str = "[]";

/// JSON file store: a single array of reminder objects
pub struct JsonStorage {
    path: PathBuf,
    backup_path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_path: backup_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reminder_file(), config.backup_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    fn parse(path: &Path, content: &str) -> AppResult<ReminderCollection> {
        if content.trim().is_empty() {
            return Ok(ReminderCollection::default());
        }

        serde_json::from_str(content).map_err(|e| {
            AppError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    fn read(path: &Path) -> AppResult<String> {
        fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn write(path: &Path, content: &str) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        fs::write(path, content)
            .map_err(|e| AppError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn to_pretty_json(collection: &ReminderCollection) -> AppResult<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        collection
            .serialize(&mut serializer)
            .map_err(|e| AppError::Storage(format!("Failed to serialize reminders: {}", e)))?;

        let mut content = String::from_utf8(buf)
            .map_err(|e| AppError::Storage(format!("Serialized reminders are not UTF-8: {}", e)))?;
        content.push('\n');
        Ok(content)
    }
}

impl ReminderStorage for JsonStorage {
    fn ensure_exists(&self) -> AppResult<()> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "creating empty reminder store");
            Self::write(&self.path, EMPTY_STORE)?;
        }
        Ok(())
    }

    fn load(&self) -> AppResult<ReminderCollection> {
        if !self.path.exists() {
            return Ok(ReminderCollection::default());
        }

        let content = Self::read(&self.path)?;
        let mut collection = Self::parse(&self.path, &content)?;

        let fixed = collection.assign_missing_ids();
        if fixed > 0 {
            debug!(fixed, "assigned ids to reminders loaded without one");
            self.save(&collection)?;
        }

        debug!(path = %self.path.display(), count = collection.len(), "loaded reminders");
        Ok(collection)
    }

    fn save(&self, collection: &ReminderCollection) -> AppResult<()> {
        let content = Self::to_pretty_json(collection)?;
        Self::write(&self.path, &content)?;
        debug!(path = %self.path.display(), count = collection.len(), "saved reminders");
        Ok(())
    }

    fn reset(&self) -> AppResult<()> {
        Self::write(&self.path, EMPTY_STORE)?;
        info!(path = %self.path.display(), "reminder store reset");
        Ok(())
    }

    fn backup(&self) -> AppResult<usize> {
        if !self.path.exists() {
            return Err(AppError::Storage(format!(
                "Nothing to back up: {} does not exist",
                self.path.display()
            )));
        }

        let content = Self::read(&self.path)?;
        let count = Self::parse(&self.path, &content)?.len();
        Self::write(&self.backup_path, &content)?;

        info!(from = %self.path.display(), to = %self.backup_path.display(), count, "backup written");
        Ok(count)
    }

    fn restore(&self) -> AppResult<usize> {
        if !self.backup_path.exists() {
            return Err(AppError::Storage(format!(
                "No backup found at {}",
                self.backup_path.display()
            )));
        }

        // Refuse to overwrite the live store with a corrupt backup
        let content = Self::read(&self.backup_path)?;
        let count = Self::parse(&self.backup_path, &content)?.len();
        Self::write(&self.path, &content)?;

        info!(from = %self.backup_path.display(), to = %self.path.display(), count, "backup restored");
        Ok(count)
    }
}
