use std::process::ExitCode;

use alertify::cli::{Cli, Commands};
use alertify::commands::{handle_config_command, handle_reminder_command};
use alertify::config::Config;
use alertify::utils::logging::init_tracing;
use alertify::utils::output::set_color_enabled;
use alertify::utils::{report_error, AppError, OutputStyle};
use anyhow::Result;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app_err) => report_error(app_err),
                None => eprintln!("❌ {}", OutputStyle::error(&format!("{:#}", err))),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let mut config = Config::load_custom(&config_path)?;

    if let Some(file) = &cli.file {
        config = config.with_reminder_file(file.clone());
        config.validate()?;
    }

    set_color_enabled(config.general.color);
    tracing::debug!(store = %config.reminder_file().display(), "using reminder store");

    if let Some(Commands::Config(args)) = &cli.command {
        return handle_config_command(&config, &config_path, args.command.clone());
    }

    let actions = cli.plan()?;

    if config.general.show_header {
        OutputStyle::print_header();
    }

    handle_reminder_command(&config, &actions)
}
