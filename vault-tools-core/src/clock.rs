//! Calendar arithmetic: month bounds, week bounds, and stepped date ranges.
//!
//! All functions are pure. Ranges are returned as `Vec`s so calling twice
//! with the same arguments always yields the same sequence.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Deserialize;

use crate::error::ClockError;

/// Which weekday a 7-day week begins on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Sunday => "sunday",
        }
    }

    /// Days elapsed since the start of the week containing `date`.
    fn offset(self, date: NaiveDate) -> u64 {
        let offset = match self {
            Self::Monday => date.weekday().num_days_from_monday(),
            Self::Sunday => date.weekday().num_days_from_sunday(),
        };
        u64::from(offset)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Number of days in `month` (1-12) of `year`, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    date - Days::new(week_start.offset(date))
}

/// Monday of the week containing `date`.
///
/// For Sunday-start weeks this is the day after the start, so a week is
/// always named after the ISO week it mostly covers.
pub fn monday_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let start = start_of_week(date, week_start);
    start + Days::new(u64::from((7 - start.weekday().num_days_from_monday()) % 7))
}

/// Last day of the week containing `date`.
pub fn end_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    start_of_week(date, week_start) + Days::new(6)
}

/// Every date from `start` to `end` inclusive.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, ClockError> {
    date_range_step(start, end, 1)
}

/// Dates from `start`, advancing `step` days at a time while `<= end`.
pub fn date_range_step(
    start: NaiveDate,
    end: NaiveDate,
    step: u64,
) -> Result<Vec<NaiveDate>, ClockError> {
    if start > end {
        return Err(ClockError::InvalidRange { start, end });
    }
    if step == 0 {
        return Err(ClockError::InvalidStep);
    }

    let mut dates = Vec::new();
    let mut current = Some(start);
    while let Some(date) = current.filter(|d| *d <= end) {
        dates.push(date);
        current = date.checked_add_days(Days::new(step));
    }
    Ok(dates)
}

/// Start dates of every week that overlaps the month containing `date`.
///
/// The first entry may fall in the previous month when the month does not
/// begin on `week_start`.
pub fn weeks_overlapping_month(date: NaiveDate, week_start: WeekStart) -> Vec<NaiveDate> {
    let first = start_of_week(start_of_month(date), week_start);
    // first <= end_of_month and the step is non-zero, so this cannot fail.
    date_range_step(first, end_of_month(date), 7).unwrap_or_default()
}

#[cfg(test)]
#[path = "tests/clock_tests.rs"]
mod tests;
