//! Monthly and weekly log notes.
//!
//! Both are plain Markdown: a heading, links to the neighbouring logs, then
//! one link per daily note so the journal can be walked from either end.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use vault_tools_config::Config;
use vault_tools_core::format;

use crate::error::BujoError;
use crate::paths::{monthly_log_file_path, weekly_log_file_path};
use crate::period::{Day, Month, Week};

fn link(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    format!("[[{stem}]]")
}

fn day_line(day: &Day) -> Result<String, BujoError> {
    let label = format::render(day.date, "dddd Do")?;
    Ok(format!("- [[{}]] {label}", day.note_name()))
}

/// Monthly log for the month containing `date`.
pub fn build_monthly_log_note(date: NaiveDate, config: &Config) -> Result<String, BujoError> {
    let month = Month::containing(date, config)?;
    let prev = monthly_log_file_path(month.prev_month_start(), config)?;
    let next = monthly_log_file_path(month.next_month_start(), config)?;

    let mut lines = vec![
        format!("# {}", format::render(month.first_day, "MMMM YYYY")?),
        String::new(),
        format!("{} | {}", link(&prev), link(&next)),
    ];
    for week in &month.weeks {
        lines.push(String::new());
        lines.push(match week.note_name() {
            Some(name) => format!("## Week {} ([[{name}]])", week.week_number),
            None => format!("## Week {}", week.week_number),
        });
        lines.push(String::new());
        for day in week.days.iter().filter(|d| d.date.month() == month.first_day.month()) {
            lines.push(day_line(day)?);
        }
    }

    log::debug!(
        "Built monthly log {} with {} weeks",
        month.note_name(),
        month.weeks.len()
    );
    Ok(lines.join("\n"))
}

/// Weekly log for the week containing `date`.
///
/// Requires `WEEKLY_NOTE_FORMAT` for the neighbouring-week links.
pub fn build_weekly_log_note(date: NaiveDate, config: &Config) -> Result<String, BujoError> {
    let week = Week::containing(date, config)?;
    let prev = weekly_log_file_path(week.prev_week_start(), config)?;
    let next = weekly_log_file_path(week.next_week_start(), config)?;
    let month = monthly_log_file_path(week.start(), config)?;

    let mut lines = vec![
        format!("# Week {}", week.week_number),
        String::new(),
        format!("{} | {} | {}", link(&prev), link(&month), link(&next)),
        String::new(),
    ];
    for day in &week.days {
        lines.push(day_line(day)?);
    }
    Ok(lines.join("\n"))
}

/// Write a log note, refusing to replace an existing one unless `force` is set.
pub fn write_log_note(path: &Path, contents: &str, force: bool) -> Result<PathBuf, BujoError> {
    if path.exists() && !force {
        return Err(BujoError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BujoError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, contents).map_err(|e| BujoError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(path.to_path_buf())
}
