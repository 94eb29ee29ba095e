//! Days, weeks and months of the journal.

use std::path::PathBuf;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use vault_tools_config::Config;
use vault_tools_core::clock::{self, date_range, end_of_month, start_of_month};

use crate::error::BujoError;
use crate::paths::{daily_log_file_path, monthly_log_file_path, weekly_log_file_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: NaiveDate,
    pub daily_log_file_path: PathBuf,
}

impl Day {
    pub fn new(date: NaiveDate, config: &Config) -> Result<Self, BujoError> {
        Ok(Self {
            date,
            daily_log_file_path: daily_log_file_path(date, config)?,
        })
    }

    /// Name of the daily note, as used in wiki links.
    pub fn note_name(&self) -> String {
        self.daily_log_file_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn previous_day(&self) -> NaiveDate {
        self.date - Days::new(1)
    }

    pub fn next_day(&self) -> NaiveDate {
        self.date + Days::new(1)
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    /// `YYYY-WW`, the ISO year and week of the week's Monday.
    pub week_number: String,
    /// `None` when no `WEEKLY_NOTE_FORMAT` is configured.
    pub weekly_log_file_path: Option<PathBuf>,
    /// Seven consecutive days, in order.
    pub days: Vec<Day>,
}

impl Week {
    /// The week (per the configured week start) containing `date`.
    pub fn containing(date: NaiveDate, config: &Config) -> Result<Self, BujoError> {
        let start = clock::start_of_week(date, config.week_start);
        let end = clock::end_of_week(date, config.week_start);
        let days = date_range(start, end)?
            .into_iter()
            .map(|d| Day::new(d, config))
            .collect::<Result<Vec<_>, _>>()?;

        let iso = clock::monday_of_week(start, config.week_start).iso_week();
        let week_number = format!("{}-{:02}", iso.year(), iso.week());

        let weekly_log_file_path = match config.weekly_note_format {
            Some(_) => Some(weekly_log_file_path(date, config)?),
            None => None,
        };

        Ok(Self {
            week_number,
            weekly_log_file_path,
            days,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn end(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date
    }

    pub fn prev_week_start(&self) -> NaiveDate {
        self.start() - Days::new(7)
    }

    pub fn next_week_start(&self) -> NaiveDate {
        self.end() + Days::new(1)
    }

    /// Name of the weekly note, if weekly notes are configured.
    pub fn note_name(&self) -> Option<String> {
        self.weekly_log_file_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    /// First day of the calendar month.
    pub first_day: NaiveDate,
    pub monthly_log_file_path: PathBuf,
    /// Every week overlapping the month, so the first and last may spill
    /// into the neighbouring months.
    pub weeks: Vec<Week>,
}

impl Month {
    pub fn containing(date: NaiveDate, config: &Config) -> Result<Self, BujoError> {
        let weeks = clock::weeks_overlapping_month(date, config.week_start)
            .into_iter()
            .map(|week_start| Week::containing(week_start, config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            first_day: start_of_month(date),
            monthly_log_file_path: monthly_log_file_path(date, config)?,
            weeks,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.weeks[0].start()
    }

    pub fn end(&self) -> NaiveDate {
        self.weeks[self.weeks.len() - 1].end()
    }

    pub fn prev_month_start(&self) -> NaiveDate {
        start_of_month(self.first_day - Days::new(1))
    }

    pub fn next_month_start(&self) -> NaiveDate {
        end_of_month(self.first_day) + Days::new(1)
    }

    pub fn note_name(&self) -> String {
        self.monthly_log_file_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Days of the month itself, leaving out the spill-over of the outer weeks.
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        let month = self.first_day.month();
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .filter(move |d| d.date.month() == month)
    }
}

/// Parse a `YYYY-WW` ISO week into the Monday of that week.
pub fn parse_week(value: &str) -> Result<NaiveDate, BujoError> {
    let invalid = || BujoError::InvalidWeek(value.to_string());
    let (year, week) = value.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let week: u32 = week.parse().map_err(|_| invalid())?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(invalid)
}

/// Parse a `YYYY-MM` month into its first day.
pub fn parse_month(value: &str) -> Result<NaiveDate, BujoError> {
    let invalid = || BujoError::InvalidMonth(value.to_string());
    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}
