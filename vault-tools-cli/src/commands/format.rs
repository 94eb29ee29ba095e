use chrono::{NaiveDate, NaiveTime};
use vault_tools_core::format::{self, CalendarValue};

use crate::error::CliError;

/// Which value a `format` invocation renders.
///
/// Without flags the current local date and time are used; with only one of
/// `--date`/`--time` the value has just that component.
fn calendar_value(date: Option<NaiveDate>, time: Option<NaiveTime>) -> CalendarValue {
    match (date, time) {
        (Some(d), Some(t)) => CalendarValue::DateTime(d.and_time(t)),
        (Some(d), None) => CalendarValue::Date(d),
        (None, Some(t)) => CalendarValue::Time(t),
        (None, None) => CalendarValue::DateTime(chrono::Local::now().naive_local()),
    }
}

pub(crate) fn run_format(
    pattern: &str,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
) -> Result<(), CliError> {
    let value = calendar_value(date, time);
    log::debug!("Rendering {pattern:?} with {value:?}");
    println!("{}", format::render(value, pattern)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_value_components() {
        let d = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let t = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(calendar_value(Some(d), None), CalendarValue::Date(d));
        assert_eq!(calendar_value(None, Some(t)), CalendarValue::Time(t));
        assert_eq!(
            calendar_value(Some(d), Some(t)),
            CalendarValue::DateTime(d.and_time(t))
        );
        assert!(matches!(
            calendar_value(None, None),
            CalendarValue::DateTime(_)
        ));
    }
}
