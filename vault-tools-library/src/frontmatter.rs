use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::FrontMatterError;

/// The YAML header of a note, as JSON-compatible values.
pub type FrontMatter = BTreeMap<String, Value>;

/// Split a note into its raw YAML header and body.
///
/// Returns `Ok(None)` when the note does not start with a `---` line.
fn split(input: &str) -> Result<Option<(String, &str)>, FrontMatterError> {
    let input = input.trim_start_matches('\u{feff}');
    let Some((first, mut rest)) = split_line(input) else {
        return Ok(None);
    };
    if first.trim_end() != "---" {
        return Ok(None);
    }

    let mut yaml_lines: Vec<&str> = Vec::new();
    while let Some((line, remaining)) = split_line(rest) {
        rest = remaining;
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Ok(Some((yaml_lines.join("\n"), rest)));
        }
        yaml_lines.push(line);
    }
    Err(FrontMatterError::Unterminated)
}

/// Next line of `input` (without its terminator) and everything after it.
fn split_line(input: &str) -> Option<(&str, &str)> {
    if input.is_empty() {
        return None;
    }
    Some(match input.find('\n') {
        Some(idx) => (input[..idx].trim_end_matches('\r'), &input[idx + 1..]),
        None => (input, ""),
    })
}

/// Extract the front matter of a note.
///
/// `Ok(None)` means the note has no front matter at all; a header that is
/// present but unreadable is an error.
pub fn extract(input: &str) -> Result<Option<FrontMatter>, FrontMatterError> {
    Ok(extract_with_body(input)?.map(|(fm, _)| fm))
}

/// Like [`extract`], also returning the body that follows the header.
pub fn extract_with_body(input: &str) -> Result<Option<(FrontMatter, &str)>, FrontMatterError> {
    let Some((raw_yaml, body)) = split(input)? else {
        return Ok(None);
    };
    if raw_yaml.trim().is_empty() {
        return Ok(Some((FrontMatter::new(), body)));
    }

    let yaml_value: serde_yml::Value = serde_yml::from_str(&raw_yaml)?;
    let json_value = serde_json::to_value(yaml_value).map_err(|_| FrontMatterError::NotAMapping)?;
    match json_value {
        Value::Object(map) => Ok(Some((map.into_iter().collect(), body))),
        Value::Null => Ok(Some((FrontMatter::new(), body))),
        _ => Err(FrontMatterError::NotAMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_front_matter() {
        let input = "---\ntitle: Dark\ntmdb_id: 70523\nwatched: true\n---\n# Dark\nBody";
        let (fm, body) = extract_with_body(input).unwrap().unwrap();
        assert_eq!(fm["title"], Value::String("Dark".into()));
        assert_eq!(fm["tmdb_id"], Value::from(70523));
        assert_eq!(fm["watched"], Value::Bool(true));
        assert_eq!(body, "# Dark\nBody");
    }

    #[test]
    fn test_lists_and_bom() {
        let input = "\u{feff}---\naliases:\n  - one\n  - two\n---\n";
        let fm = extract(input).unwrap().unwrap();
        assert_eq!(fm["aliases"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "---\r\ntitle: Dark\r\n---\r\nBody";
        let (fm, body) = extract_with_body(input).unwrap().unwrap();
        assert_eq!(fm["title"], Value::String("Dark".into()));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_front_matter() {
        assert!(extract("# Title\nBody").unwrap().is_none());
        assert!(extract("").unwrap().is_none());
    }

    #[test]
    fn test_empty_front_matter() {
        assert!(extract("---\n---\n").unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_front_matter() {
        assert!(matches!(
            extract("---\ntitle: Dark\n"),
            Err(FrontMatterError::Unterminated)
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            extract("---\ntitle: [unclosed\n---\n"),
            Err(FrontMatterError::Yaml(_))
        ));
        assert!(matches!(
            extract("---\n- a\n- b\n---\n"),
            Err(FrontMatterError::NotAMapping)
        ));
    }
}
