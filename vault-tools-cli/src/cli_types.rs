//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vault-tools")]
#[command(about = "Bullet-journal logs and media library notes for an Obsidian vault", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to $VAULT_TOOLS_CONFIG, then ~/.config/vault-tools/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by the log-writing commands.
#[derive(Args, Clone, Copy)]
pub(crate) struct WriteArgs {
    /// Write the note to the vault instead of printing it
    #[arg(short, long)]
    pub write: bool,

    /// Replace the note if it already exists
    #[arg(short, long, requires = "write")]
    pub force: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a moment.js-style format pattern
    Format {
        /// Pattern to render, e.g. "YYYY-MM-DD [Week] W"
        pattern: String,

        /// Date to render (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Time to render (HH:MM:SS, defaults to now)
        #[arg(short, long)]
        time: Option<NaiveTime>,
    },

    /// Build bullet-journal logs
    Bujo {
        #[command(subcommand)]
        action: BujoAction,
    },

    /// Print the path of a daily note
    DailyNote {
        /// Day of the note (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Manage media library notes
    Library {
        #[command(subcommand)]
        action: LibraryAction,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum BujoAction {
    /// Build the monthly log for the current or given month
    Month {
        /// Month to build the log for (YYYY-MM)
        #[arg(short, long, conflicts_with = "date")]
        month: Option<String>,

        /// Any day in the month
        #[arg(short, long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Build the weekly log for the current or given week
    Week {
        /// ISO week to build the log for (YYYY-WW)
        #[arg(long, conflicts_with = "date")]
        week: Option<String>,

        /// Any day in the week
        #[arg(short, long)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        write: WriteArgs,
    },
}

#[derive(Subcommand)]
pub(crate) enum LibraryAction {
    /// List the candidate note names for a record
    Names {
        /// Record JSON file (with a "kind" field)
        record: PathBuf,
    },

    /// Write the note for a record into the library
    Add {
        /// Record JSON file (with a "kind" field)
        record: PathBuf,

        /// Second record for the same entity, merged into the first
        #[arg(short, long)]
        merge: Option<PathBuf>,

        /// Show what would be written without touching the vault
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Replace the note at the record's plain title
        #[arg(long)]
        overwrite: bool,
    },

    /// Merge two records and print the result as JSON
    Merge {
        /// Primary record; its values win
        primary: PathBuf,

        /// Secondary record; fills gaps in the primary
        secondary: PathBuf,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,
}
