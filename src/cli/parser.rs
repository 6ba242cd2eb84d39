use crate::export::ExportFormat;
use crate::models::Mode;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for hourblocks
/// Weekly hour planning with multi-day blocks, stored in SQLite
#[derive(Parser)]
#[command(
    name = "hourblocks",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan and record hours per project and day; detect, draw and spread multi-day blocks",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How the days of a block are filled.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct FillArgs {
    /// Total hours spread evenly over the block (remainder on the first days)
    #[arg(long)]
    pub total: Option<u32>,

    /// Explicit per-day values, comma separated (e.g. 3,4,2.5)
    #[arg(long)]
    pub values: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Set the hours of a single day
    Set {
        /// Project id
        project: String,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Hours (0 clears the day)
        #[arg(allow_hyphen_values = true)]
        hours: String,

        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Show the week grid with detected blocks
    Week {
        /// Any date inside the week (YYYY-MM-DD or "today"); default today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// List blocks week by week for a month
    Month {
        /// Month (YYYY-MM); default current month
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Draw a new block across day cells of a week and fill it
    Block {
        /// Project id
        project: String,

        /// Any date inside the target week (YYYY-MM-DD)
        #[arg(long)]
        week: String,

        /// Day cells touched by the drag, 0 = Monday .. 6 = Sunday (e.g. 1,3)
        #[arg(long)]
        cells: String,

        #[command(flatten)]
        fill: FillArgs,

        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Edit the existing block containing a date
    Edit {
        /// Project id
        project: String,

        /// A date inside the block (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        fill: FillArgs,

        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Delete the block containing a date
    Unblock {
        /// Project id
        project: String,

        /// A date inside the block (YYYY-MM-DD)
        date: String,

        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Export hours or detected blocks
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        range: Option<String>,

        /// Export detected blocks instead of per-day hours
        #[arg(long)]
        blocks: bool,

        /// Mode used for block detection (with --blocks)
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
