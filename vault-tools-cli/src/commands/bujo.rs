use std::path::Path;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use vault_tools_bujo::{
    build_monthly_log_note, build_weekly_log_note, monthly_log_file_path, parse_month,
    parse_week, weekly_log_file_path, write_log_note,
};
use vault_tools_config::Config;

use crate::cli_types::WriteArgs;
use crate::commands::today;
use crate::error::CliError;

fn emit(path: &Path, content: &str, write: WriteArgs) -> Result<(), CliError> {
    if !write.write {
        println!("{content}");
        return Ok(());
    }
    let written = write_log_note(path, content, write.force)?;
    log::info!(
        "Note written to: {}",
        written.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Build (and optionally write) the monthly log.
pub(crate) fn run_bujo_month(
    config: &Config,
    month: Option<&str>,
    date: Option<NaiveDate>,
    write: WriteArgs,
) -> Result<(), CliError> {
    config.require_bujo()?;
    let date = match month {
        Some(m) => parse_month(m)?,
        None => date.unwrap_or_else(today),
    };

    let content = build_monthly_log_note(date, config)?;
    let path = monthly_log_file_path(date, config)?;
    emit(&path, &content, write)
}

/// Build (and optionally write) the weekly log.
pub(crate) fn run_bujo_week(
    config: &Config,
    week: Option<&str>,
    date: Option<NaiveDate>,
    write: WriteArgs,
) -> Result<(), CliError> {
    config.require_bujo()?;
    let date = match week {
        Some(w) => parse_week(w)?,
        None => date.unwrap_or_else(today),
    };

    let content = build_weekly_log_note(date, config)?;
    let path = weekly_log_file_path(date, config)?;
    emit(&path, &content, write)
}
