use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for plantlog
/// CLI houseplant care journal with SQLite
#[derive(Parser)]
#[command(
    name = "plantlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A houseplant care journal: watering, growth, weather-aware advice and reminders using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Register a new plant
    Add {
        #[arg(long, help = "Plant name")]
        name: String,

        #[arg(long = "type", value_name = "TYPE", help = "Species or type label")]
        kind: String,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Planting date (default: today)")]
        planted: Option<String>,

        #[arg(
            long,
            value_name = "DAYS",
            help = "Watering interval in days (default from config)"
        )]
        interval: Option<i64>,

        #[arg(long, default_value = "", help = "Free-text notes")]
        notes: String,
    },

    /// Edit a plant
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        planted: Option<String>,

        #[arg(long, value_name = "DAYS")]
        interval: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a plant (its journal is kept)
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List plants with their health
    List,

    /// Show one plant and its latest journal entries
    Show { id: i64 },

    /// Record a watering now
    Water {
        id: i64,

        #[arg(long)]
        note: Option<String>,
    },

    /// Add a journal entry (growth, fertilizer, note...)
    Note {
        id: i64,

        #[arg(long, value_name = "CM", help = "Measured height in cm")]
        height: Option<f64>,

        #[arg(long, help = "The plant was watered")]
        watered: bool,

        #[arg(long, value_name = "TYPE", help = "Fertilizer type")]
        fertilizer: Option<String>,

        #[arg(long, value_name = "DOSE", requires = "fertilizer")]
        dose: Option<String>,

        #[arg(long)]
        note: Option<String>,

        #[arg(
            long,
            help = "Entry status: W=watering, G=growth, F=fertilizer, N=note (default: by content)"
        )]
        status: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD[ HH:MM]", help = "Entry date (default: now)")]
        date: Option<String>,
    },

    /// Chronological journal of a plant
    Logs { id: i64 },

    /// Edit one journal entry
    EditLog {
        log_id: i64,

        #[arg(long, value_name = "CM")]
        height: Option<f64>,

        #[arg(long, value_name = "BOOL")]
        watered: Option<bool>,

        #[arg(long, value_name = "TYPE")]
        fertilizer: Option<String>,

        #[arg(long, value_name = "DOSE")]
        dose: Option<String>,

        #[arg(long)]
        note: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD[ HH:MM]")]
        date: Option<String>,
    },

    /// Status summary of a plant
    Stats {
        id: i64,

        #[arg(long, help = "Draw the growth history")]
        chart: bool,
    },

    /// Enable or disable the watering reminder of a plant
    #[command(group(ArgGroup::new("toggle").required(true).args(["on", "off"])))]
    Reminder {
        id: i64,

        #[arg(long)]
        on: bool,

        #[arg(long)]
        off: bool,

        #[arg(
            long,
            value_name = "MINUTES",
            requires = "on",
            help = "Custom reminder delay in minutes (default: watering interval)"
        )]
        every: Option<i64>,
    },

    /// List pending reminders
    Reminders {
        #[arg(long, help = "Deliver due reminders and remove them")]
        run: bool,
    },

    /// Weather-aware watering advice
    #[command(subcommand)]
    Weather(WeatherCommands),

    /// Plant expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Plant photos
    #[command(subcommand)]
    Photo(PhotoCommands),

    /// Ask the plant-care assistant
    Ask {
        #[arg(long, value_name = "ID", help = "Build the question from a plant and its journal")]
        plant: Option<i64>,

        #[arg(trailing_var_arg = true)]
        prompt: Vec<String>,
    },

    /// Export journal data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "ID", help = "Only this plant")]
        plant: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WeatherCommands {
    /// Fetch the forecast and store watering decisions
    Check {
        #[arg(long, value_name = "ID", help = "Only this plant")]
        plant: Option<i64>,

        #[arg(
            long = "from-file",
            value_name = "FILE",
            help = "Read a forecast.json payload instead of calling the provider"
        )]
        from_file: Option<String>,
    },

    /// Stored decisions, newest first
    History {
        #[arg(long, value_name = "ID")]
        plant: Option<i64>,
    },

    /// Today's decision for every plant
    Today,
}

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense for a plant
    Add {
        id: i64,

        #[arg(long)]
        amount: f64,

        #[arg(long)]
        note: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD[ HH:MM]")]
        date: Option<String>,
    },

    /// Expenses of a plant with their total
    List { id: i64 },

    /// Delete an expense
    Del { expense_id: i64 },
}

#[derive(Subcommand)]
pub enum PhotoCommands {
    /// Attach a photo (path or URI) to a plant
    Add {
        id: i64,

        path: String,

        #[arg(long, value_name = "YYYY-MM-DD[ HH:MM]")]
        date: Option<String>,
    },

    /// Photos of a plant, newest first
    List { id: i64 },
}
