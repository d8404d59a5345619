use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// CLI application to record work entries with derived pay totals
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record work entries with derived pay totals, view statistics and export timesheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the display language for this invocation (en, ru, uk, cs)
    #[arg(global = true, long = "lang")]
    pub lang: Option<String>,

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

    /// Manage the configuration file (view or switch language)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "set-lang",
            help = "Persist a new display language (en, ru, uk, cs)"
        )]
        set_lang: Option<String>,
    },

    /// Create an account and open a session
    Register {
        #[arg(long = "email", help = "Email address (unique)")]
        email: String,

        #[arg(long = "name", help = "Display name")]
        name: String,

        #[arg(long = "password", help = "Password (at least 6 characters)")]
        password: String,
    },

    /// Log in with an existing account
    Login {
        #[arg(long = "email")]
        email: String,

        #[arg(long = "password")]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Record a work entry
    Add {
        /// Entry date (YYYY-MM-DD or the active language's date format);
        /// today when omitted
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "event", help = "Event name")]
        event: Option<String>,

        #[arg(long = "place", help = "Event location")]
        place: Option<String>,

        #[arg(long = "desc", help = "Description of the activity")]
        desc: Option<String>,

        /// Start time (HH:MM on the entry date, or a full datetime)
        #[arg(long = "start")]
        start: Option<String>,

        /// End time (HH:MM, or a full datetime); an HH:MM end at or
        /// before the start rolls over to the next day
        #[arg(long = "end")]
        end: Option<String>,

        /// Break duration in minutes
        #[arg(long = "break", default_value_t = 0)]
        break_minutes: i64,

        /// Hourly rate (decimal, in the active language's number format)
        #[arg(long = "rate")]
        rate: Option<String>,

        /// Signature image file, encoded and attached to the entry
        #[arg(long = "signature-file")]
        signature_file: Option<String>,

        /// Already-encoded signature payload (passed through opaquely)
        #[arg(long = "signature-data")]
        signature_data: Option<String>,
    },

    /// List recorded work entries
    List {
        /// Restrict to a period: YYYY, YYYY-MM or YYYY-MM-DD
        #[arg(long = "period")]
        period: Option<String>,
    },

    /// Show aggregated statistics (total hours, total amount, per day)
    Stats {
        #[arg(long = "period", help = "Restrict to a period")]
        period: Option<String>,
    },

    /// Export work entries (pdf, xlsx, csv, json)
    Export {
        #[arg(long = "format", value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Output file; defaults to work-entries-YYYY-MM.<ext>
        #[arg(long = "file")]
        file: Option<String>,

        #[arg(long = "period", help = "Restrict to a period")]
        period: Option<String>,
    },
}
