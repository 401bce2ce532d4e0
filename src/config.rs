use crate::core::data::Priority;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const APP_DIR: &str = "alertify";
const BACKUP_FILE_NAME: &str = "reminders_backup.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub reminder_file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_file: Option<PathBuf>,
    #[serde(default)]
    pub default_priority: Priority,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_true")]
    pub show_header: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);

        Self {
            general: GeneralConfig {
                reminder_file: data_dir.join("reminders.json"),
                backup_file: None,
                default_priority: Priority::Medium,
                color: true,
                show_header: true,
            },
        }
    }
}

impl Config {
    /// Load the config at `config_path`, writing defaults there first if it is missing
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(config_path)?;
            info!(path = %config_path.display(), "created default configuration");
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(config_path)
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", config_path.display(), e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.reminder_file.as_os_str().is_empty() {
            return Err(AppError::Config("Reminder file cannot be empty".to_string()));
        }

        if self.backup_file() == self.general.reminder_file {
            return Err(AppError::Config(
                "Backup file must differ from the reminder file".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Point the store at another file; an explicit backup setting is dropped with it
    pub fn with_reminder_file(mut self, path: PathBuf) -> Self {
        self.general.reminder_file = path;
        self.general.backup_file = None;
        self
    }

    pub fn reminder_file(&self) -> PathBuf {
        self.general.reminder_file.clone()
    }

    /// Configured backup path, or `reminders_backup.json` beside the store
    pub fn backup_file(&self) -> PathBuf {
        match &self.general.backup_file {
            Some(path) => path.clone(),
            None => self
                .general
                .reminder_file
                .parent()
                .map(|dir| dir.join(BACKUP_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(BACKUP_FILE_NAME)),
        }
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }
}
