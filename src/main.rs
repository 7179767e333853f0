//! Creative Dashboard - Main Entry Point
//!
//! CLI front end for the dashboard data file. The actual implementation
//! is in the `creative_dashboard` library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use creative_dashboard::model::local_date_today;
use creative_dashboard::{ConsoleNotifier, DashboardHandler, ProjectQuery};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Creative Dashboard - track creative projects, due dates and streaks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the dashboard data file
    #[arg(long, default_value = "app_data.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new project
    Add {
        name: String,
        #[arg(long, default_value = "General")]
        category: String,
        /// Due date (YYYY-MM-DD); invalid dates are stored as empty
        #[arg(long, default_value = "")]
        due_date: String,
        /// Recurrence: None, Daily, Weekly, Monthly
        #[arg(long, default_value = "None")]
        recurrence: String,
    },
    /// Edit the first project with the given name
    Edit {
        name: String,
        #[arg(long)]
        new_name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        due_date: Option<String>,
        #[arg(long)]
        recurrence: Option<String>,
        /// Status: Not Started, In Progress, Completed
        #[arg(long)]
        status: Option<String>,
    },
    /// Remove the first project with the given name
    Remove { name: String },
    /// Remove all projects
    Reset,
    /// List projects with optional filters
    List {
        /// Case-insensitive substring match on name
        #[arg(long, default_value = "")]
        search: String,
        /// Status filter: All, Active, Completed
        #[arg(long, default_value = "All")]
        status: String,
        /// Recurrence filter: All, None, Daily, Weekly, Monthly
        #[arg(long, default_value = "All")]
        recurrence: String,
        /// Sort key: Name, Date, Status
        #[arg(long, default_value = "Name")]
        sort_by: String,
    },
    /// Show the completion summary and statistics
    Stats,
    /// Run one due-date notification check
    Notify,
    /// Check due dates periodically until interrupted
    Watch {
        /// Seconds between checks (default: once per day)
        #[arg(long, default_value_t = 86400)]
        interval_secs: u64,
    },
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
    /// Write the current document to a file
    Export { path: PathBuf },
    /// Replace the current document with one from a file
    Import { path: PathBuf },
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Show current settings
    Show,
    /// Set the theme: System Default, Light, Dark
    Theme { value: String },
    /// Enable or disable notifications
    Notifications { value: bool },
    /// Set the font scale: Small, Medium, Large, ExtraLarge
    FontScale { value: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut handler = DashboardHandler::new(&args.file);

    let output = match args.command {
        Command::Add {
            name,
            category,
            due_date,
            recurrence,
        } => {
            let recurrence = recurrence.parse().map_err(anyhow::Error::msg)?;
            handler.handle_add(&name, &category, &due_date, recurrence)?
        }
        Command::Edit {
            name,
            new_name,
            category,
            due_date,
            recurrence,
            status,
        } => {
            let recurrence = recurrence
                .map(|r| r.parse().map_err(anyhow::Error::msg))
                .transpose()?;
            let status = status
                .map(|s| s.parse().map_err(anyhow::Error::msg))
                .transpose()?;
            handler.handle_edit(&name, new_name, category, due_date, recurrence, status)?
        }
        Command::Remove { name } => handler.handle_remove(&name)?,
        Command::Reset => handler.handle_reset()?,
        Command::List {
            search,
            status,
            recurrence,
            sort_by,
        } => {
            let query = ProjectQuery {
                search_text: search,
                status: status.parse().map_err(anyhow::Error::msg)?,
                recurrence: recurrence.parse().map_err(anyhow::Error::msg)?,
                sort_by: sort_by.parse().map_err(anyhow::Error::msg)?,
            };
            handler.handle_list(&query)?
        }
        Command::Stats => handler.handle_stats(local_date_today())?,
        Command::Notify => handler.handle_notify(local_date_today(), &ConsoleNotifier)?,
        Command::Watch { interval_secs } => {
            let notifier = ConsoleNotifier;
            loop {
                let report = handler.handle_notify(local_date_today(), &notifier)?;
                tracing::info!(%report, "due-date check complete");
                thread::sleep(Duration::from_secs(interval_secs));
            }
        }
        Command::Settings { action } => match action {
            SettingsCommand::Show => handler.handle_show_settings()?,
            SettingsCommand::Theme { value } => {
                handler.handle_set_theme(value.parse().map_err(anyhow::Error::msg)?)?
            }
            SettingsCommand::Notifications { value } => handler.handle_set_notifications(value)?,
            SettingsCommand::FontScale { value } => {
                handler.handle_set_font_scale(value.parse().map_err(anyhow::Error::msg)?)?
            }
        },
        Command::Export { path } => handler.handle_export(&path)?,
        Command::Import { path } => handler.handle_import(&path)?,
    };

    println!("{output}");
    Ok(())
}
