use crate::config::PAGE_SIZE_CHOICES;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("invalid page size: {s}"))?;
    if PAGE_SIZE_CHOICES.contains(&n) {
        Ok(n)
    } else {
        Err(format!("page size must be one of {PAGE_SIZE_CHOICES:?}"))
    }
}

/// Command-line interface definition for rStaffDesk
#[derive(Parser)]
#[command(
    name = "rstaffdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Staff portal companion: browse and export timesheets, lay out calendar reminders",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple accounts)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the API base URL from the configuration
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration")]
        force: bool,
    },

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },

    /// Store the access token and organization key used for API calls
    Login {
        #[arg(long)]
        token: String,

        #[arg(long = "organization", visible_alias = "org")]
        organization: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show one page of attendance logs, optionally exporting it
    Timesheets {
        #[arg(long = "from", value_name = "YYYY-MM-DD", help = "First day included")]
        from: Option<String>,

        #[arg(long = "to", value_name = "YYYY-MM-DD", help = "Last day included")]
        to: Option<String>,

        #[arg(long, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,

        #[arg(
            long = "size",
            value_parser = parse_page_size,
            help = "Rows per page (default: from configuration)"
        )]
        size: Option<usize>,

        #[arg(long, value_enum, help = "Export the displayed page")]
        export: Option<ExportFormat>,

        #[arg(long = "out-dir", value_name = "DIR", help = "Export directory")]
        out_dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite existing export files")]
        force: bool,

        #[arg(long = "no-open", help = "Do not open a viewer for print exports")]
        no_open: bool,
    },

    /// Manage reminders
    Reminders {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Lay out one day's reminders into non-overlapping lanes
    Layout {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to lay out (default: today)")]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReminderAction {
    /// List reminders
    List {
        #[arg(long = "on", value_name = "YYYY-MM-DD", help = "Only reminders active on this day")]
        on: Option<String>,
    },

    /// Create a reminder
    Add {
        #[arg(long, help = "Reminder title")]
        title: String,

        #[arg(long, value_name = "DATE", help = "Start (YYYY-MM-DD or YYYY-MM-DDTHH:MM)")]
        start: String,

        #[arg(long, value_name = "DATE", help = "End (defaults to the start day)")]
        end: Option<String>,

        #[arg(long, help = "Profile the reminder belongs to")]
        profile: Option<i64>,

        #[arg(long)]
        remarks: Option<String>,
    },

    /// Change fields of an existing reminder
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        #[arg(long, value_name = "DATE")]
        end: Option<String>,

        #[arg(long)]
        profile: Option<i64>,

        #[arg(long)]
        remarks: Option<String>,
    },

    /// Delete a reminder by id
    Delete { id: i64 },

    /// Delete reminders whose end date has passed
    Sweep {
        #[arg(long, help = "Keep sweeping on the configured interval until Ctrl-C")]
        watch: bool,
    },
}
