use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::input::prompt_yes_no;
use crate::utils::{print_success, print_warning, OutputStyle};
use anyhow::Result;
use std::path::Path;

pub fn handle_config_command(
    config: &Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(config, config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset { force }) => handle_reset_command(config_path, force),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    println!("⚙️  Alertify Configuration");
    println!("{}", OutputStyle::header_separator());

    OutputStyle::print_field("Config file", &config_path.display().to_string());
    OutputStyle::print_field("Reminder file", &config.reminder_file().display().to_string());
    OutputStyle::print_field("Backup file", &config.backup_file().display().to_string());
    OutputStyle::print_field("Default priority", &config.general.default_priority.to_string());
    OutputStyle::print_field("Color", &config.general.color.to_string());
    OutputStyle::print_field("Show header", &config.general.show_header.to_string());

    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("{}", OutputStyle::header_separator());
    println!("Available configuration commands:");
    println!("  alertify config show    - Show current configuration");
    println!("  alertify config path    - Print the configuration file location");
    println!("  alertify config reset   - Reset configuration to defaults");
    println!();
    println!("Configuration file location: {}", config_path.display());
    Ok(())
}

fn handle_reset_command(config_path: &Path, force: bool) -> Result<()> {
    if !force
        && !prompt_yes_no(
            "Are you sure you want to reset configuration to defaults? This will overwrite your current settings.",
        )?
    {
        print_warning("Reset cancelled.");
        return Ok(());
    }

    Config::default().save_to(config_path)?;
    print_success("Configuration reset to defaults!");
    Ok(())
}
