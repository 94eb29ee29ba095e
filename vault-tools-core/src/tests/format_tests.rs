use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn fmt(value: impl Into<CalendarValue>, pattern: &str) -> String {
    render(value, pattern).unwrap()
}

#[test]
fn renders_iso_date() {
    assert_eq!(fmt(date(2021, 1, 1), "YYYY-MM-DD"), "2021-01-01");
    assert_eq!(fmt(date(2024, 2, 29), "YYYY-MM-DD"), "2024-02-29");
}

#[test]
fn escaped_characters_pass_through() {
    assert_eq!(
        fmt(date(2021, 1, 1), r"YYYYMMDD [\Y\Y\Y\Y\M\M\D\D]"),
        "20210101 [YYYYMMDD]"
    );
    assert_eq!(fmt(date(2021, 1, 1), r"\YYYYY"), "Y2021");
}

#[test]
fn bracket_spans_are_not_tokenized() {
    assert_eq!(fmt(date(2021, 3, 5), "[Week] W"), "[Week] 9");
    assert_eq!(fmt(date(2021, 3, 5), "YYYY [MM]"), "2021 [MM]");
}

#[test]
fn pattern_without_tokens_is_unescaped_literal() {
    assert_eq!(fmt(date(2021, 1, 1), "-/ _"), "-/ _");
    assert_eq!(fmt(date(2021, 1, 1), r"\T\o\d\a\y"), "Today");
    assert_eq!(fmt(date(2021, 1, 1), ""), "");
}

#[test]
fn year_tokens() {
    assert_eq!(fmt(date(2021, 6, 1), "YYYY"), "2021");
    assert_eq!(fmt(date(2021, 6, 1), "YY"), "21");
    assert_eq!(fmt(date(2005, 6, 1), "YY"), "05");
    assert_eq!(fmt(date(987, 6, 1), "YYYY"), "0987");
}

#[test]
fn month_tokens() {
    let d = date(2021, 9, 4);
    assert_eq!(fmt(d, "M"), "9");
    assert_eq!(fmt(d, "MM"), "09");
    assert_eq!(fmt(d, "MMM"), "Sep");
    assert_eq!(fmt(d, "MMMM"), "September");
    assert_eq!(fmt(d, "Mo"), "9th");
    assert_eq!(fmt(date(2021, 1, 4), "Mo"), "1st");
    assert_eq!(fmt(date(2021, 12, 4), "Mo"), "12th");
}

#[test]
fn quarter_tokens() {
    assert_eq!(fmt(date(2021, 1, 1), "Q"), "1");
    assert_eq!(fmt(date(2021, 3, 31), "Q"), "1");
    assert_eq!(fmt(date(2021, 4, 1), "Qo"), "2nd");
    assert_eq!(fmt(date(2021, 9, 1), "Qo"), "3rd");
    assert_eq!(fmt(date(2021, 12, 1), "Q"), "4");
}

#[test]
fn day_of_month_tokens() {
    let cases = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (31, "31st"),
    ];
    for (day, expected) in cases {
        assert_eq!(fmt(date(2021, 1, day), "Do"), expected);
    }
    assert_eq!(fmt(date(2021, 1, 7), "D"), "7");
    assert_eq!(fmt(date(2021, 1, 7), "DD"), "07");
}

#[test]
fn day_of_year_tokens() {
    assert_eq!(fmt(date(2021, 1, 1), "DDD"), "1");
    assert_eq!(fmt(date(2021, 1, 1), "DDDD"), "001");
    assert_eq!(fmt(date(2021, 1, 1), "DDDo"), "1st");
    assert_eq!(fmt(date(2021, 12, 31), "DDD"), "365");
    assert_eq!(fmt(date(2024, 12, 31), "DDDD"), "366");
    assert_eq!(fmt(date(2021, 2, 1), "DDDD"), "032");
}

#[test]
fn day_of_week_tokens() {
    // 2021-01-01 was a Friday.
    let d = date(2021, 1, 1);
    assert_eq!(fmt(d, "d"), "5");
    assert_eq!(fmt(d, "do"), "5th");
    assert_eq!(fmt(d, "dd"), "Fr");
    assert_eq!(fmt(d, "ddd"), "Fri");
    assert_eq!(fmt(d, "dddd"), "Friday");
    assert_eq!(fmt(d, "E"), "5");

    let sunday = date(2021, 1, 3);
    assert_eq!(fmt(sunday, "d"), "0");
    assert_eq!(fmt(sunday, "do"), "0th");
    assert_eq!(fmt(sunday, "dd"), "Su");
    assert_eq!(fmt(sunday, "E"), "7");
}

#[test]
fn week_tokens_at_year_boundary() {
    let d = date(2021, 1, 1);
    assert_eq!(fmt(d, "w"), "0");
    assert_eq!(fmt(d, "wo"), "0th");
    assert_eq!(fmt(d, "W"), "53");
    assert_eq!(fmt(d, "Wo"), "53rd");
    assert_eq!(fmt(d, "WW"), "53");
}

#[test]
fn week_tokens_mid_year() {
    // First Sunday of 2021 is January 3rd.
    assert_eq!(fmt(date(2021, 1, 3), "w"), "1");
    assert_eq!(fmt(date(2021, 1, 4), "W"), "1");
    assert_eq!(fmt(date(2021, 1, 4), "WW"), "01");
    assert_eq!(fmt(date(2021, 1, 11), "Wo"), "2nd");
}

#[test]
fn longest_token_wins() {
    assert_eq!(fmt(date(2021, 1, 1), "YYYYMMDD"), "20210101");
    assert_eq!(fmt(date(2021, 1, 1), "DDDDD"), "0011");
    assert_eq!(fmt(date(2021, 2, 3), "MMMMM"), "February2");
}

#[test]
fn renders_time_values() {
    assert_eq!(fmt(time(12, 34, 56), "HH:mm:ss"), "12:34:56");
    assert_eq!(fmt(time(7, 5, 9), "H:m:s"), "7:5:9");
    assert_eq!(fmt(time(7, 5, 9), "HH:mm:ss"), "07:05:09");
}

#[test]
fn twelve_hour_clock() {
    assert_eq!(fmt(time(0, 0, 0), "h A"), "12 AM");
    assert_eq!(fmt(time(0, 0, 0), "hh a"), "12 am");
    assert_eq!(fmt(time(9, 0, 0), "hh a"), "09 am");
    assert_eq!(fmt(time(12, 0, 0), "h A"), "12 PM");
    assert_eq!(fmt(time(23, 0, 0), "h a"), "11 pm");
}

#[test]
fn renders_datetime_values() {
    let dt = date(2021, 1, 1).and_hms_opt(12, 34, 56).unwrap();
    assert_eq!(fmt(dt, "YYYY-MM-DD HH:mm:ss"), "2021-01-01 12:34:56");
}

#[test]
fn unsupported_tokens_are_not_implemented() {
    let dt = date(2021, 1, 1).and_hms_opt(12, 34, 56).unwrap();
    for token in ["e", "YYYYYY", "Y", "y", "N", "gggg", "GG", "k", "kk", "SSS", "S", "z", "zz", "Z", "ZZ", "X", "x"] {
        assert_eq!(
            render(dt, token),
            Err(FormatError::NotImplemented(token.to_string())),
            "token {token}"
        );
        assert_eq!(
            render(date(2021, 1, 1), token),
            Err(FormatError::NotImplemented(token.to_string()))
        );
        assert_eq!(
            render(time(1, 2, 3), token),
            Err(FormatError::NotImplemented(token.to_string()))
        );
    }
}

#[test]
fn unsupported_token_is_reported_even_with_valid_tokens_around() {
    let err = render(date(2021, 1, 1), "YYYY-MM-DD SSS").unwrap_err();
    assert_eq!(err, FormatError::NotImplemented("SSS".to_string()));
}

#[test]
fn time_tokens_need_a_time() {
    let err = render(date(2021, 1, 1), "HH").unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingComponent {
            token: "HH".to_string(),
            component: "time",
        }
    );
}

#[test]
fn date_tokens_need_a_date() {
    let err = render(time(1, 2, 3), "YYYY").unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingComponent {
            token: "YYYY".to_string(),
            component: "date",
        }
    );
}

#[test]
fn parse_produces_tokens_and_literals() {
    assert_eq!(
        parse(r"YYYY-[W]WW \d"),
        vec![
            Segment::Token(Token::Year4),
            Segment::Literal("-[W]".to_string()),
            Segment::Token(Token::IsoWeekPadded),
            Segment::Literal(" d".to_string()),
        ]
    );
}

#[test]
fn token_spelling_round_trips() {
    for spelling in VOCABULARY {
        let token = Token::from_spelling(spelling).unwrap();
        assert_eq!(token.as_str(), *spelling);
    }
    assert_eq!(Token::from_spelling("YYY"), None);
    assert!(Token::Year4.is_supported());
    assert!(!Token::from_spelling("X").unwrap().is_supported());
}

#[test]
fn validate_rejects_unsupported_patterns() {
    assert!(validate("YYYY-MM-DD").is_ok());
    assert!(validate(r"[gggg] \g").is_ok());
    assert_eq!(
        validate("gggg-[W]ww"),
        Err(FormatError::NotImplemented("gggg".to_string()))
    );
}
