//! moment.js-style date formatting.
//!
//! Obsidian names daily, weekly and monthly notes with moment.js format
//! strings (`YYYY-MM-DD`, `gggg-[W]ww`, ...). This module renders chrono
//! values against those patterns so generated file names line up with the
//! ones Obsidian creates itself.
//!
//! A pattern is split into [`Segment`]s by a single regex pass. Backslash
//! escapes (`\Y`) and bracket spans (`[...]`) are literal; everything else
//! that matches the token vocabulary becomes a [`Token`].
//!
//! ```
//! use chrono::NaiveDate;
//! use vault_tools_core::format::render;
//!
//! let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
//! assert_eq!(render(date, "YYYY-MM-DD").unwrap(), "2021-01-01");
//! assert_eq!(render(date, "Do MMMM").unwrap(), "1st January");
//! ```

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use crate::error::FormatError;
use crate::humanize::ordinal;

/// A value a pattern can be rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarValue {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

impl CalendarValue {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Time(_) => None,
            Self::DateTime(dt) => Some(dt.date()),
        }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::Date(_) => None,
            Self::Time(t) => Some(*t),
            Self::DateTime(dt) => Some(dt.time()),
        }
    }
}

impl From<NaiveDate> for CalendarValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveTime> for CalendarValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<NaiveDateTime> for CalendarValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

/// A recognized format token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `YYYY`: 2021
    Year4,
    /// `YY`: 21
    Year2,
    /// `M`: 1 .. 12
    Month,
    /// `Mo`: 1st .. 12th
    MonthOrdinal,
    /// `MM`: 01 .. 12
    MonthPadded,
    /// `MMM`: Jan .. Dec
    MonthShort,
    /// `MMMM`: January .. December
    MonthLong,
    /// `Q`: 1 .. 4
    Quarter,
    /// `Qo`: 1st .. 4th
    QuarterOrdinal,
    /// `D`: 1 .. 31
    DayOfMonth,
    /// `Do`: 1st .. 31st
    DayOfMonthOrdinal,
    /// `DD`: 01 .. 31
    DayOfMonthPadded,
    /// `DDD`: 1 .. 366
    DayOfYear,
    /// `DDDo`: 1st .. 366th
    DayOfYearOrdinal,
    /// `DDDD`: 001 .. 366
    DayOfYearPadded,
    /// `d`: 0 .. 6, Sunday first
    DayOfWeek,
    /// `do`: 0th .. 6th
    DayOfWeekOrdinal,
    /// `dd`: Su .. Sa
    DayOfWeekMin,
    /// `ddd`: Sun .. Sat
    DayOfWeekShort,
    /// `dddd`: Sunday .. Saturday
    DayOfWeekLong,
    /// `E`: 1 .. 7, Monday first
    IsoDayOfWeek,
    /// `w`: 0 .. 53, weeks start on Sunday
    Week,
    /// `wo`
    WeekOrdinal,
    /// `W`: 1 .. 53
    IsoWeek,
    /// `Wo`
    IsoWeekOrdinal,
    /// `WW`: 01 .. 53
    IsoWeekPadded,
    /// `H`: 0 .. 23
    Hour24,
    /// `HH`: 00 .. 23
    Hour24Padded,
    /// `h`: 1 .. 12
    Hour12,
    /// `hh`: 01 .. 12
    Hour12Padded,
    /// `m`
    Minute,
    /// `mm`
    MinutePadded,
    /// `s`
    Second,
    /// `ss`
    SecondPadded,
    /// `A`: AM PM
    MeridiemUpper,
    /// `a`: am pm
    MeridiemLower,
    /// Part of the moment.js vocabulary, never rendered.
    Unsupported(&'static str),
}

/// Tokens in match priority order: within each family the longest spelling
/// comes first so `YYYY` is never read as `YY` + `YY`.
const VOCABULARY: &[&str] = &[
    // Month
    "MMMM", "MMM", "MM", "Mo", "M",
    // Quarter
    "Qo", "Q",
    // Day of month / year
    "DDDD", "DDDo", "DDD", "DD", "Do", "D",
    // Day of week
    "dddd", "ddd", "dd", "do", "d",
    // Day of week (locale / ISO)
    "e", "E",
    // Week of year
    "wo", "w",
    // Week of year (ISO)
    "WW", "Wo", "W",
    // Year
    "YYYYYY", "YYYY", "YY", "Y",
    // Era year / era
    "y", "NNNNN", "NNNN", "NNN", "NN", "N",
    // Week year
    "gggg", "gg", "GGGG", "GG",
    // AM/PM
    "A", "a",
    // Hour
    "HH", "H", "hh", "h", "kk", "k",
    // Minute / second
    "mm", "m", "ss", "s",
    // Fractional second
    "SSSSSSSSS", "SSSSSSSS", "SSSSSSS", "SSSSSS", "SSSSS", "SSSS", "SSS", "SS", "S",
    // Time zone
    "ZZ", "Z", "zz", "z",
    // Unix timestamps
    "X", "x",
];

static RE_SEGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    let tokens: Vec<String> = VOCABULARY.iter().map(|t| regex::escape(t)).collect();
    Regex::new(&format!(
        r"(?s)\\(?P<escaped>.)|(?P<bracket>\[(?:\\.|[^\]\\])*\])|(?P<token>{})",
        tokens.join("|")
    ))
    .expect("token vocabulary is a valid regex")
});

static RE_ESCAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\(.)").expect("static pattern"));

impl Token {
    /// Look up a token by its exact (case-sensitive) spelling.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        let token = match spelling {
            "YYYY" => Self::Year4,
            "YY" => Self::Year2,
            "M" => Self::Month,
            "Mo" => Self::MonthOrdinal,
            "MM" => Self::MonthPadded,
            "MMM" => Self::MonthShort,
            "MMMM" => Self::MonthLong,
            "Q" => Self::Quarter,
            "Qo" => Self::QuarterOrdinal,
            "D" => Self::DayOfMonth,
            "Do" => Self::DayOfMonthOrdinal,
            "DD" => Self::DayOfMonthPadded,
            "DDD" => Self::DayOfYear,
            "DDDo" => Self::DayOfYearOrdinal,
            "DDDD" => Self::DayOfYearPadded,
            "d" => Self::DayOfWeek,
            "do" => Self::DayOfWeekOrdinal,
            "dd" => Self::DayOfWeekMin,
            "ddd" => Self::DayOfWeekShort,
            "dddd" => Self::DayOfWeekLong,
            "E" => Self::IsoDayOfWeek,
            "w" => Self::Week,
            "wo" => Self::WeekOrdinal,
            "W" => Self::IsoWeek,
            "Wo" => Self::IsoWeekOrdinal,
            "WW" => Self::IsoWeekPadded,
            "H" => Self::Hour24,
            "HH" => Self::Hour24Padded,
            "h" => Self::Hour12,
            "hh" => Self::Hour12Padded,
            "m" => Self::Minute,
            "mm" => Self::MinutePadded,
            "s" => Self::Second,
            "ss" => Self::SecondPadded,
            "A" => Self::MeridiemUpper,
            "a" => Self::MeridiemLower,
            other => Self::Unsupported(VOCABULARY.iter().copied().find(|t| *t == other)?),
        };
        Some(token)
    }

    /// The token as written in a pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year4 => "YYYY",
            Self::Year2 => "YY",
            Self::Month => "M",
            Self::MonthOrdinal => "Mo",
            Self::MonthPadded => "MM",
            Self::MonthShort => "MMM",
            Self::MonthLong => "MMMM",
            Self::Quarter => "Q",
            Self::QuarterOrdinal => "Qo",
            Self::DayOfMonth => "D",
            Self::DayOfMonthOrdinal => "Do",
            Self::DayOfMonthPadded => "DD",
            Self::DayOfYear => "DDD",
            Self::DayOfYearOrdinal => "DDDo",
            Self::DayOfYearPadded => "DDDD",
            Self::DayOfWeek => "d",
            Self::DayOfWeekOrdinal => "do",
            Self::DayOfWeekMin => "dd",
            Self::DayOfWeekShort => "ddd",
            Self::DayOfWeekLong => "dddd",
            Self::IsoDayOfWeek => "E",
            Self::Week => "w",
            Self::WeekOrdinal => "wo",
            Self::IsoWeek => "W",
            Self::IsoWeekOrdinal => "Wo",
            Self::IsoWeekPadded => "WW",
            Self::Hour24 => "H",
            Self::Hour24Padded => "HH",
            Self::Hour12 => "h",
            Self::Hour12Padded => "hh",
            Self::Minute => "m",
            Self::MinutePadded => "mm",
            Self::Second => "s",
            Self::SecondPadded => "ss",
            Self::MeridiemUpper => "A",
            Self::MeridiemLower => "a",
            Self::Unsupported(spelling) => spelling,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as-is (escapes already removed).
    Literal(String),
    Token(Token),
}

/// Split a pattern into literal and token segments.
///
/// Adjacent literal text is merged into a single segment.
pub fn parse(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in RE_SEGMENTS.captures_iter(pattern) {
        // Group 0 always participates in a match.
        let Some(whole) = caps.get(0) else { continue };
        push_literal(&mut segments, &pattern[last..whole.start()]);
        last = whole.end();

        if let Some(escaped) = caps.name("escaped") {
            push_literal(&mut segments, escaped.as_str());
        } else if let Some(bracket) = caps.name("bracket") {
            let unescaped = RE_ESCAPED.replace_all(bracket.as_str(), "$1");
            push_literal(&mut segments, &unescaped);
        } else if let Some(token) = caps.name("token").and_then(|m| Token::from_spelling(m.as_str()))
        {
            segments.push(Segment::Token(token));
        }
    }
    push_literal(&mut segments, &pattern[last..]);

    segments
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Literal(prev)) = segments.last_mut() {
        prev.push_str(text);
    } else {
        segments.push(Segment::Literal(text.to_string()));
    }
}

/// Render `value` against a moment.js `pattern`.
pub fn render(value: impl Into<CalendarValue>, pattern: &str) -> Result<String, FormatError> {
    render_segments(&parse(pattern), value.into())
}

/// Render pre-parsed segments.
pub fn render_segments(segments: &[Segment], value: CalendarValue) -> Result<String, FormatError> {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(token) => out.push_str(&render_token(*token, value)?),
        }
    }
    Ok(out)
}

/// Check that every token in `pattern` can be rendered.
///
/// Lets callers reject a configured pattern before any file is touched.
pub fn validate(pattern: &str) -> Result<(), FormatError> {
    match parse(pattern).into_iter().find_map(|segment| match segment {
        Segment::Token(Token::Unsupported(spelling)) => Some(spelling),
        _ => None,
    }) {
        Some(spelling) => Err(FormatError::not_implemented(spelling)),
        None => Ok(()),
    }
}

const WEEKDAY_MIN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Week of the year with Sunday as the first day; days before the first
/// Sunday of the year are in week 0.
fn sunday_week(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7
}

fn render_token(token: Token, value: CalendarValue) -> Result<String, FormatError> {
    let missing = |component: &'static str| FormatError::MissingComponent {
        token: token.as_str().to_string(),
        component,
    };
    let date = || value.date().ok_or_else(|| missing("date"));
    let time = || value.time().ok_or_else(|| missing("time"));

    let rendered = match token {
        Token::Year4 => format!("{:04}", date()?.year()),
        Token::Year2 => format!("{:02}", date()?.year().rem_euclid(100)),
        Token::Month => date()?.month().to_string(),
        Token::MonthOrdinal => ordinal(i64::from(date()?.month())),
        Token::MonthPadded => format!("{:02}", date()?.month()),
        Token::MonthShort => date()?.format("%b").to_string(),
        Token::MonthLong => date()?.format("%B").to_string(),
        Token::Quarter => quarter(date()?).to_string(),
        Token::QuarterOrdinal => ordinal(i64::from(quarter(date()?))),
        Token::DayOfMonth => date()?.day().to_string(),
        Token::DayOfMonthOrdinal => ordinal(i64::from(date()?.day())),
        Token::DayOfMonthPadded => format!("{:02}", date()?.day()),
        Token::DayOfYear => date()?.ordinal().to_string(),
        Token::DayOfYearOrdinal => ordinal(i64::from(date()?.ordinal())),
        Token::DayOfYearPadded => format!("{:03}", date()?.ordinal()),
        Token::DayOfWeek => date()?.weekday().num_days_from_sunday().to_string(),
        Token::DayOfWeekOrdinal => ordinal(i64::from(date()?.weekday().num_days_from_sunday())),
        Token::DayOfWeekMin => {
            WEEKDAY_MIN[date()?.weekday().num_days_from_sunday() as usize].to_string()
        }
        Token::DayOfWeekShort => date()?.format("%a").to_string(),
        Token::DayOfWeekLong => date()?.format("%A").to_string(),
        Token::IsoDayOfWeek => date()?.weekday().number_from_monday().to_string(),
        Token::Week => sunday_week(date()?).to_string(),
        Token::WeekOrdinal => ordinal(i64::from(sunday_week(date()?))),
        Token::IsoWeek => date()?.iso_week().week().to_string(),
        Token::IsoWeekOrdinal => ordinal(i64::from(date()?.iso_week().week())),
        Token::IsoWeekPadded => format!("{:02}", date()?.iso_week().week()),
        Token::Hour24 => time()?.hour().to_string(),
        Token::Hour24Padded => format!("{:02}", time()?.hour()),
        Token::Hour12 => time()?.hour12().1.to_string(),
        Token::Hour12Padded => format!("{:02}", time()?.hour12().1),
        Token::Minute => time()?.minute().to_string(),
        Token::MinutePadded => format!("{:02}", time()?.minute()),
        Token::Second => time()?.second().to_string(),
        Token::SecondPadded => format!("{:02}", time()?.second()),
        Token::MeridiemUpper => (if time()?.hour12().0 { "PM" } else { "AM" }).to_string(),
        Token::MeridiemLower => (if time()?.hour12().0 { "pm" } else { "am" }).to_string(),
        Token::Unsupported(spelling) => return Err(FormatError::not_implemented(spelling)),
    };
    Ok(rendered)
}

fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
