use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn start_of_month_is_day_one() {
    assert_eq!(start_of_month(date(2024, 1, 1)), date(2024, 1, 1));
    assert_eq!(start_of_month(date(2024, 1, 15)), date(2024, 1, 1));
    assert_eq!(start_of_month(date(2024, 1, 31)), date(2024, 1, 1));
}

#[test]
fn end_of_month_is_last_day() {
    assert_eq!(end_of_month(date(2024, 1, 1)), date(2024, 1, 31));
    assert_eq!(end_of_month(date(2024, 1, 15)), date(2024, 1, 31));
    assert_eq!(end_of_month(date(2024, 1, 31)), date(2024, 1, 31));
    assert_eq!(end_of_month(date(2024, 4, 10)), date(2024, 4, 30));
    assert_eq!(end_of_month(date(2023, 12, 25)), date(2023, 12, 31));
}

#[test]
fn end_of_february_respects_leap_years() {
    assert_eq!(end_of_month(date(2024, 2, 1)), date(2024, 2, 29));
    assert_eq!(end_of_month(date(2023, 2, 14)), date(2023, 2, 28));
    assert_eq!(end_of_month(date(1900, 2, 1)), date(1900, 2, 28));
    assert_eq!(end_of_month(date(2000, 2, 1)), date(2000, 2, 29));
}

#[test]
fn leap_years_and_month_lengths() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert_eq!(days_in_month(2024, 2), Some(29));
    assert_eq!(days_in_month(2023, 2), Some(28));
    assert_eq!(days_in_month(2023, 12), Some(31));
    assert_eq!(days_in_month(2023, 4), Some(30));
    assert_eq!(days_in_month(2023, 13), None);
    assert_eq!(days_in_month(2023, 0), None);
}

#[test]
fn date_range_single_step() {
    let range = date_range(date(2024, 1, 1), date(2024, 1, 5)).unwrap();
    assert_eq!(
        range,
        vec![
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 4),
            date(2024, 1, 5),
        ]
    );
}

#[test]
fn date_range_weekly_step() {
    let range = date_range_step(date(2024, 1, 1), date(2024, 1, 31), 7).unwrap();
    assert_eq!(
        range,
        vec![
            date(2024, 1, 1),
            date(2024, 1, 8),
            date(2024, 1, 15),
            date(2024, 1, 22),
            date(2024, 1, 29),
        ]
    );
}

#[test]
fn date_range_same_day() {
    let range = date_range(date(2024, 3, 3), date(2024, 3, 3)).unwrap();
    assert_eq!(range, vec![date(2024, 3, 3)]);
}

#[test]
fn date_range_length_matches_day_difference() {
    let pairs = [
        (date(2024, 1, 1), date(2024, 12, 31)),
        (date(2023, 2, 27), date(2023, 3, 2)),
        (date(1999, 12, 31), date(2000, 1, 1)),
    ];
    for (start, end) in pairs {
        let range = date_range(start, end).unwrap();
        assert_eq!(range.len() as i64, (end - start).num_days() + 1);
    }
}

#[test]
fn date_range_rejects_reversed_bounds() {
    let err = date_range(date(2024, 1, 5), date(2024, 1, 1)).unwrap_err();
    assert_eq!(
        err,
        ClockError::InvalidRange {
            start: date(2024, 1, 5),
            end: date(2024, 1, 1),
        }
    );
}

#[test]
fn date_range_rejects_zero_step() {
    let err = date_range_step(date(2024, 1, 1), date(2024, 1, 5), 0).unwrap_err();
    assert_eq!(err, ClockError::InvalidStep);
}

#[test]
fn date_range_is_restartable() {
    let first = date_range_step(date(2024, 5, 1), date(2024, 5, 31), 3).unwrap();
    let second = date_range_step(date(2024, 5, 1), date(2024, 5, 31), 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn full_month_range_has_one_entry_per_day() {
    for month in 1..=12 {
        let d = date(2024, month, 10);
        let range = date_range(start_of_month(d), end_of_month(d)).unwrap();
        assert_eq!(Some(range.len() as u32), days_in_month(2024, month));
    }
}

#[test]
fn week_bounds_monday_start() {
    // 2024-01-03 is a Wednesday.
    assert_eq!(start_of_week(date(2024, 1, 3), WeekStart::Monday), date(2024, 1, 1));
    assert_eq!(end_of_week(date(2024, 1, 3), WeekStart::Monday), date(2024, 1, 7));
    // Sunday belongs to the week that started the Monday before.
    assert_eq!(start_of_week(date(2024, 1, 7), WeekStart::Monday), date(2024, 1, 1));
}

#[test]
fn monday_of_week_follows_week_start() {
    // 2024-08-04 is a Sunday.
    assert_eq!(monday_of_week(date(2024, 8, 7), WeekStart::Monday), date(2024, 8, 5));
    assert_eq!(monday_of_week(date(2024, 8, 4), WeekStart::Monday), date(2024, 7, 29));
    assert_eq!(monday_of_week(date(2024, 8, 4), WeekStart::Sunday), date(2024, 8, 5));
    assert_eq!(monday_of_week(date(2024, 8, 10), WeekStart::Sunday), date(2024, 8, 5));
}

#[test]
fn week_start_names() {
    assert_eq!(WeekStart::Monday.as_str(), "monday");
    assert_eq!(WeekStart::Sunday.as_str(), "sunday");
}

#[test]
fn week_bounds_sunday_start() {
    assert_eq!(start_of_week(date(2024, 1, 3), WeekStart::Sunday), date(2023, 12, 31));
    assert_eq!(end_of_week(date(2024, 1, 3), WeekStart::Sunday), date(2024, 1, 6));
    assert_eq!(start_of_week(date(2024, 1, 7), WeekStart::Sunday), date(2024, 1, 7));
}

#[test]
fn weeks_overlapping_month_cover_trailing_days() {
    // September 2024 starts on a Sunday and ends on a Monday.
    let weeks = weeks_overlapping_month(date(2024, 9, 15), WeekStart::Monday);
    assert_eq!(
        weeks,
        vec![
            date(2024, 8, 26),
            date(2024, 9, 2),
            date(2024, 9, 9),
            date(2024, 9, 16),
            date(2024, 9, 23),
            date(2024, 9, 30),
        ]
    );
}

#[test]
fn weeks_overlapping_month_starting_on_monday() {
    let weeks = weeks_overlapping_month(date(2024, 1, 20), WeekStart::Monday);
    assert_eq!(weeks.first(), Some(&date(2024, 1, 1)));
    assert_eq!(weeks.last(), Some(&date(2024, 1, 29)));
    assert_eq!(weeks.len(), 5);
}
