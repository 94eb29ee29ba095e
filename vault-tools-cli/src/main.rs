//! vault-tools CLI
//!
//! Command-line interface for bullet-journal logs and media library notes in
//! an Obsidian vault.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::Level;

use cli_types::{BujoAction, Cli, Commands, ConfigAction, LibraryAction};
use commands::bujo::{run_bujo_month, run_bujo_week};
use commands::config::{run_config_path, run_config_show};
use commands::daily_note::run_daily_note;
use commands::format::run_format;
use commands::library::{run_library_add, run_library_merge, run_library_names};
use error::CliError;
use vault_tools_config::Config;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let load_config = || Config::load(cli.config.clone());

    match cli.command {
        Commands::Format {
            ref pattern,
            date,
            time,
        } => run_format(pattern, date, time),
        Commands::Bujo { ref action } => {
            let config = load_config()?;
            match action {
                BujoAction::Month { month, date, write } => {
                    run_bujo_month(&config, month.as_deref(), *date, *write)
                }
                BujoAction::Week { week, date, write } => {
                    run_bujo_week(&config, week.as_deref(), *date, *write)
                }
            }
        }
        Commands::DailyNote { date } => run_daily_note(&load_config()?, date),
        Commands::Library { ref action } => match action {
            LibraryAction::Names { record } => run_library_names(&load_config()?, record),
            LibraryAction::Add {
                record,
                merge,
                dry_run,
                overwrite,
            } => run_library_add(
                &load_config()?,
                record,
                merge.as_deref(),
                *dry_run,
                *overwrite,
            ),
            LibraryAction::Merge { primary, secondary } => run_library_merge(primary, secondary),
        },
        Commands::Config { ref action } => match action {
            ConfigAction::Show => run_config_show(cli.config.clone()),
            ConfigAction::Path => run_config_path(cli.config.clone()),
        },
    }
}

/// Plain messages at info level; level prefixes for warnings and errors.
/// `--verbose` adds timestamps and debug output, `--quiet` keeps only
/// warnings and errors. `RUST_LOG` overrides both.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5} {}] {}",
                    buf.timestamp(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            } else if record.level() <= Level::Warn {
                writeln!(buf, "{}: {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .init();
}
