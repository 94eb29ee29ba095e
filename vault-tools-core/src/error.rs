use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while rendering a format pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The token is part of the moment.js vocabulary but has no rendering
    /// here (locale weekday, eras, fractional seconds, time zones, ...).
    #[error("Format token not implemented: {0}")]
    NotImplemented(String),

    /// The token needs a date (or time) part the value does not carry.
    #[error("Format token {token} needs a {component}, but the value has none")]
    MissingComponent {
        token: String,
        component: &'static str,
    },
}

/// Errors raised by the calendar helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date range step: must be at least one day")]
    InvalidStep,
}

impl FormatError {
    pub fn not_implemented(token: impl Into<String>) -> Self {
        Self::NotImplemented(token.into())
    }
}
