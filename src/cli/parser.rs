use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftsheet
/// CLI application to record event staff shifts with SQLite
#[derive(Parser)]
#[command(
    name = "shiftsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record staff shifts and breaks for events, sign them off and export timesheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Start a shift for a staff member
    Start {
        /// Staff name
        #[arg(long, short = 'n', help = "Staff member name")]
        name: String,

        #[arg(long, short = 'e', help = "Event name (default: config default_event)")]
        event: Option<String>,

        #[arg(long, help = "Shift date YYYY-MM-DD (default: today)")]
        date: Option<String>,

        #[arg(long = "at", help = "Start time HH:MM (default: now)")]
        at: Option<String>,
    },

    /// Start a timed break on an active shift
    BreakStart {
        /// Shift id (or a unique prefix)
        id: String,

        #[arg(
            long,
            short = 'k',
            default_value = "10 min",
            help = "Break type: 10, 30, meal, custom"
        )]
        kind: String,

        #[arg(long = "at", help = "Break start HH:MM (default: now)")]
        at: Option<String>,

        #[arg(long, help = "Date of --at (default: shift date)")]
        date: Option<String>,
    },

    /// End the running break of a shift
    BreakEnd {
        id: String,

        #[arg(long = "at", help = "Break end HH:MM (default: now)")]
        at: Option<String>,

        #[arg(long, help = "Date of --at (default: shift date)")]
        date: Option<String>,
    },

    /// Record a fixed-duration break (no timestamps)
    BreakAdd {
        id: String,

        #[arg(long, short = 'k', help = "Break type: 10, 30, meal, custom")]
        kind: String,

        #[arg(long, short = 'm', help = "Minutes (default: preset of the break type)")]
        minutes: Option<i64>,
    },

    /// End a shift, optionally attaching a signature image
    End {
        id: String,

        #[arg(long = "at", help = "End time HH:MM (default: now)")]
        at: Option<String>,

        #[arg(long, help = "Date of --at (default: shift date, next day if earlier)")]
        date: Option<String>,

        #[arg(long, value_name = "FILE", help = "Signature image captured at sign-off")]
        signature: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show active shifts (drafts) or resume one of them
    Resume {
        /// Shift id (or a unique prefix); omit to list all active shifts
        id: Option<String>,
    },

    /// List completed shifts
    List {
        #[arg(long, short = 'e', help = "Filter by event name")]
        event: Option<String>,

        /// Filter by period.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and ranges (start:end)
        /// in the same format, or `all`.
        #[arg(long, short = 'p', help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "details", help = "Show the breaks of every shift")]
        details: bool,
    },

    /// Correct a shift (times, labels) or its break list
    Edit {
        id: String,

        #[arg(long, help = "New event name")]
        event: Option<String>,

        #[arg(long, help = "New staff name")]
        name: Option<String>,

        #[arg(long, help = "New shift date YYYY-MM-DD")]
        date: Option<String>,

        #[arg(long = "in", help = "New start time HH:MM (on the shift date)")]
        start: Option<String>,

        #[arg(long = "out", help = "New end time HH:MM (completed shifts only)")]
        end: Option<String>,

        #[arg(long = "remove-break", value_name = "N", help = "Remove break N (1-based)")]
        remove_break: Option<usize>,
    },

    /// Delete a shift and its breaks
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show known staff and event names
    Suggest {
        #[arg(long, help = "Only staff names")]
        names: bool,

        #[arg(long, help = "Only event names")]
        events: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export completed shifts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Absolute output path (default: ./Timesheets-<timestamp>.<ext>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'e', help = "Only shifts of this event")]
        event: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
