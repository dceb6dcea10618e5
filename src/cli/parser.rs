use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rVolunteer
#[derive(Parser)]
#[command(
    name = "rvolunteer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse NYC volunteer opportunities from CSV data and chat with a scripted volunteer assistant",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the CSV source (local path or http(s) URL)
    #[arg(global = true, long = "source", value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// List volunteer opportunities in chronological order
    Events {
        /// Only show one category ("All" shows everything)
        #[arg(long, short, default_value = "All")]
        category: String,

        /// Filter by start date.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2011")
        /// - YYYY-MM              → entire month (e.g. "2011-08")
        /// - YYYY-MM-DD           → specific day (e.g. "2011-08-01")
        /// - START:END            → range of the formats above (e.g. "2011-08:2011-10")
        /// - all                   → no date filtering
        #[arg(long, short)]
        period: Option<String>,

        /// Show at most N events
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// List categories with the number of opportunities in each
    Categories,

    /// Show the dashboard summary for the loaded opportunities
    Stats {
        /// Category used for the "current filter" figure
        #[arg(long, short, default_value = "All")]
        category: String,
    },

    /// Export normalized opportunities
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only export one category
        #[arg(long, short, default_value = "All")]
        category: String,

        /// Filter by start date (same formats as `events --period`)
        #[arg(long, short)]
        period: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Talk to the volunteer assistant.
    ///
    /// Each MESSAGE is one turn; a number picks an option from the last
    /// answer. Without messages an interactive session reads from stdin.
    Chat {
        /// Messages to send, in order
        messages: Vec<String>,

        /// Print the transcript as JSON instead of chat bubbles
        #[arg(long)]
        json: bool,
    },

    /// Show or update the user profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
}
