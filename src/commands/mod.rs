pub mod configure;
pub mod handlers;

pub use configure::handle_config_command;
pub use handlers::{handle_reminder_command, run_actions};
