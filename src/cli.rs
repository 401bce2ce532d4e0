use clap::{ArgGroup, Args, Parser, Subcommand};
use chrono::NaiveDate;
use std::path::PathBuf;
use crate::core::data::{Priority, Status};
use crate::core::operations::ReminderUpdate;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::parse_due_date;

const ACTION_FLAGS: [&str; 6] = ["add", "due", "priority", "remove", "update", "set_status"];

#[derive(Parser, Debug)]
#[command(name = "alertify")]
#[command(about = "CLI tool for managing reminders")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(group(
    ArgGroup::new("target")
        .args(["remove", "update", "set_status"])
        .multiple(false)
))]
#[command(group(
    ArgGroup::new("maintenance")
        .args(["reset", "backup", "restore"])
        .multiple(false)
))]
pub struct Cli {
    #[arg(short = 'a', long, value_name = "REMINDER", help = "Add a new reminder")]
    pub add: Option<String>,

    #[arg(
        short = 'd',
        long,
        value_name = "DATE",
        value_parser = parse_due_arg,
        help = "Set due date (YYYY-MM-DD, or N/A to clear)"
    )]
    pub due: Option<DueArg>,

    #[arg(short = 'p', long, value_name = "PRIORITY", help = "Set priority (Low, Medium, High)")]
    pub priority: Option<Priority>,

    #[arg(
        short = 'r',
        long,
        value_name = "SERIAL",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Remove a reminder by serial number"
    )]
    pub remove: Option<u32>,

    #[arg(
        short = 'u',
        long,
        value_name = "SERIAL",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Update a reminder by serial number"
    )]
    pub update: Option<u32>,

    #[arg(
        short = 's',
        long = "set-status",
        num_args = 2,
        value_names = ["SERIAL", "STATUS"],
        help = "Set the status of a reminder (Pending, Completed, Overdue) by serial number"
    )]
    pub set_status: Option<Vec<String>>,

    #[arg(
        short = 'x',
        long,
        conflicts_with_all = ACTION_FLAGS,
        help = "Reset the reminders file"
    )]
    pub reset: bool,

    #[arg(
        short = 'b',
        long,
        conflicts_with_all = ACTION_FLAGS,
        help = "Back up reminders to the backup file"
    )]
    pub backup: bool,

    #[arg(
        short = 'R',
        long,
        conflicts_with_all = ACTION_FLAGS,
        help = "Restore reminders from the backup file"
    )]
    pub restore: bool,

    #[arg(short = 'c', long, value_name = "FILE", global = true, help = "Use a custom config file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", env = "ALERTIFY_FILE", help = "Reminder file to use")]
    pub file: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Due date as given on the command line; `None` means "no due date"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueArg(pub Option<NaiveDate>);

fn parse_due_arg(s: &str) -> Result<DueArg, String> {
    parse_due_date(s).map(DueArg)
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset {
        #[arg(short, long, help = "Do not ask for confirmation")]
        force: bool,
    },
}

/// One step of a reminder invocation, executed in order
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add {
        text: String,
        due: Option<NaiveDate>,
        priority: Option<Priority>,
    },
    Update {
        serial: usize,
        update: ReminderUpdate,
    },
    SetStatus {
        serial: usize,
        status: Status,
    },
    Remove {
        serial: usize,
    },
    List,
    Reset,
    Backup,
    Restore,
}

impl Cli {
    /// Turn the parsed flags into the ordered list of actions to run.
    ///
    /// Reset, backup and restore run alone; everything else ends with a listing.
    pub fn plan(&self) -> AppResult<Vec<Action>> {
        if self.reset {
            return Ok(vec![Action::Reset]);
        }
        if self.backup {
            return Ok(vec![Action::Backup]);
        }
        if self.restore {
            return Ok(vec![Action::Restore]);
        }

        if (self.due.is_some() || self.priority.is_some())
            && self.add.is_none()
            && self.update.is_none()
        {
            return Err(AppError::InvalidInput(
                "--due and --priority need --add or --update".to_string(),
            ));
        }

        if self.update.is_some() && self.due.is_none() && self.priority.is_none() {
            return Err(AppError::InvalidInput(
                "--update needs --due and/or --priority".to_string(),
            ));
        }

        let mut actions = Vec::new();

        if let Some(text) = &self.add {
            actions.push(Action::Add {
                text: text.clone(),
                due: self.due.and_then(|d| d.0),
                priority: self.priority,
            });
        }

        if let Some(serial) = self.remove {
            actions.push(Action::Remove { serial: serial as usize });
        } else if let Some(serial) = self.update {
            let update = ReminderUpdate {
                due: self.due.map(|d| d.0),
                priority: self.priority,
            };
            actions.push(Action::Update { serial: serial as usize, update });
        } else if let Some(values) = &self.set_status {
            actions.push(parse_set_status(values)?);
        }

        actions.push(Action::List);
        Ok(actions)
    }
}

fn parse_set_status(values: &[String]) -> AppResult<Action> {
    let [serial, status] = values else {
        return Err(AppError::InvalidInput(
            "--set-status takes a serial number and a status".to_string(),
        ));
    };

    let serial = serial
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::InvalidInput(format!("invalid serial number '{}'", serial)))?;
    let status = status.parse::<Status>().map_err(AppError::InvalidInput)?;

    Ok(Action::SetStatus { serial, status })
}
