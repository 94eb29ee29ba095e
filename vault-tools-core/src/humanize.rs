//! Small helpers for turning numbers and lists into English text.

pub const DEFAULT_SEPARATOR: &str = ", ";
pub const AND_ENDING_SEPARATOR: &str = " and ";
pub const OR_ENDING_SEPARATOR: &str = " or ";

/// Ordinal suffix for an integer: `1` → `"st"`, `12` → `"th"`, `23` → `"rd"`.
///
/// Anything whose last two digits fall in `10..=20` takes `"th"`.
pub fn ordinal_suffix(value: i64) -> &'static str {
    let value = value.unsigned_abs();
    if (10..=20).contains(&(value % 100)) {
        return "th";
    }
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// The number followed by its ordinal suffix, e.g. `"21st"`.
pub fn ordinal(value: i64) -> String {
    format!("{}{}", value, ordinal_suffix(value))
}

/// Join words into a natural-language enumeration.
///
/// With an `ending_separator` the last pair is joined by it instead of
/// `separator`. When there are more than two words and `series_separator` is
/// set, the trimmed separator is kept before the ending ("a, b, and c").
pub fn list_join<S: AsRef<str>>(
    words: &[S],
    separator: &str,
    ending_separator: Option<&str>,
    series_separator: bool,
) -> String {
    match words {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let ending = match ending_separator {
                None => separator.to_string(),
                Some(ending) if words.len() > 2 && series_separator => {
                    format!("{} {}", separator.trim_end(), ending.trim_start())
                }
                Some(ending) => ending.to_string(),
            };
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{}{}{}", head.join(separator), ending, last.as_ref())
        }
    }
}

/// "a, b, and c"
pub fn and_join<S: AsRef<str>>(words: &[S]) -> String {
    list_join(words, DEFAULT_SEPARATOR, Some(AND_ENDING_SEPARATOR), true)
}

/// "a, b, or c"
pub fn or_join<S: AsRef<str>>(words: &[S]) -> String {
    list_join(words, DEFAULT_SEPARATOR, Some(OR_ENDING_SEPARATOR), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal(0), "0th");
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(20), "20th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(53), "53rd");
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(122), "122nd");
    }

    #[test]
    fn test_list_join() {
        assert_eq!(list_join(&["a"], ", ", Some(" and "), true), "a");
        assert_eq!(list_join(&["a", "b"], ", ", Some(" and "), true), "a and b");
        assert_eq!(
            list_join(&["a", "b", "c"], ", ", Some(" and "), true),
            "a, b, and c"
        );
        assert_eq!(
            list_join(&["a", "b", "c"], ", ", Some(" and "), false),
            "a, b and c"
        );
        assert_eq!(list_join(&["a", "b"], ", ", None, false), "a, b");
        assert_eq!(list_join(&["a", "b", "c"], ", ", None, false), "a, b, c");
        assert_eq!(list_join::<&str>(&[], ", ", None, false), "");
    }

    #[test]
    fn test_and_or_join() {
        assert_eq!(and_join(&["US", "GB"]), "US and GB");
        assert_eq!(or_join(&["x", "y", "z"]), "x, y, or z");
    }
}
