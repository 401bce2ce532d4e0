use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No reminder found with serial number {serial}")]
    NotFound { serial: usize },
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub enum FlowResult {
    EmptyList,
    Purged(usize),
    Success(String),
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::NotFound { .. } => {
            eprintln!("⚠️  {}", OutputStyle::error(&err.to_string()));
        }
        AppError::InvalidInput(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
            eprintln!("{}", OutputStyle::muted("Run 'alertify --help' for usage."));
        }
        AppError::Io(_) | AppError::Storage(_) | AppError::Config(_) => {
            eprintln!("❌ {}", OutputStyle::error(&err.to_string()));
        }
    }
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::EmptyList => {
            println!("{}", OutputStyle::pending("No reminders found."));
        }
        FlowResult::Purged(count) => {
            let noun = if count == 1 { "reminder" } else { "reminders" };
            let msg = format!("Cleared {} completed {}", count, noun);
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Success(msg) => {
            println!("{}", OutputStyle::success(&msg));
        }
    }
}
