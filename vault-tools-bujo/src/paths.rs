//! Where journal notes live in the vault.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use vault_tools_config::{Config, ConfigError};
use vault_tools_core::{clock, format};

use crate::error::BujoError;

/// Obsidian's own default when the daily-notes plugin has no format set.
pub const DEFAULT_DAILY_NOTE_FORMAT: &str = "YYYY-MM-DD";

fn note_file(folder: &Path, date: NaiveDate, pattern: &str) -> Result<PathBuf, BujoError> {
    let stem = format::render(date, pattern)?;
    Ok(folder.join(format!("{stem}.md")))
}

/// Path of the monthly log containing `date`.
///
/// Without a `MONTHLY_NOTE_FOLDER` the note goes to the vault root.
pub fn monthly_log_file_path(date: NaiveDate, config: &Config) -> Result<PathBuf, BujoError> {
    let pattern = config
        .monthly_note_format
        .as_deref()
        .ok_or(ConfigError::MissingKey("MONTHLY_NOTE_FORMAT"))?;
    let folder = config.monthly_note_folder.as_deref().unwrap_or(config.vault_path.as_path());
    note_file(folder, date, pattern)
}

/// Path of the weekly log for the week containing `date`.
///
/// The name is rendered from the week's Monday, the same day that gives the
/// week its number.
pub fn weekly_log_file_path(date: NaiveDate, config: &Config) -> Result<PathBuf, BujoError> {
    let pattern = config
        .weekly_note_format
        .as_deref()
        .ok_or(ConfigError::MissingKey("WEEKLY_NOTE_FORMAT"))?;
    let folder = config.weekly_note_folder.as_deref().unwrap_or(config.vault_path.as_path());
    note_file(folder, clock::monday_of_week(date, config.week_start), pattern)
}

/// Path of the daily note for `date`, following the daily-notes plugin settings.
pub fn daily_log_file_path(date: NaiveDate, config: &Config) -> Result<PathBuf, BujoError> {
    let pattern = config
        .obsidian
        .daily_note_format
        .as_deref()
        .unwrap_or(DEFAULT_DAILY_NOTE_FORMAT);
    let folder = match config.obsidian.daily_note_folder.as_deref() {
        Some(folder) => config.vault_path.join(folder),
        None => config.vault_path.clone(),
    };
    note_file(&folder, date, pattern)
}
