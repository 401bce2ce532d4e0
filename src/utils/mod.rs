pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod output;

pub use error::{report_error, AppError, AppResult};
pub use output::{print_listing, print_success, print_warning, OutputStyle};
