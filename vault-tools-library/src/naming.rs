//! Turning record titles into note file names.

use std::path::{Path, PathBuf};

/// Characters that are not allowed in file names on at least one platform.
const FORBIDDEN: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Strip characters that cannot appear in a file name.
///
/// Trailing dots and spaces are dropped too (Windows refuses them). A name
/// with nothing left becomes `__`.
pub fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !FORBIDDEN.contains(c) && !c.is_control())
        .collect();
    let trimmed = cleaned.trim_end_matches(['.', ' ']).trim_start();
    if trimmed.is_empty() {
        "__".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<dir>/<sanitized name>.md`
pub fn note_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.md", sanitize(name)))
}
