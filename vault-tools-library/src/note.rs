//! Rendering library notes and writing them into the vault.

use std::path::Path;

use serde_json::Value;

use crate::error::NoteError;
use crate::frontmatter::FrontMatter;
use crate::models::{MediaRecord, NoteName};

/// Front matter for a record: every scalar field that has a value.
///
/// Source identifiers are scalar fields, so they always end up here and a
/// later [`crate::reconcile::is_same_entity`] can find them.
pub fn front_matter(record: &MediaRecord) -> Result<FrontMatter, NoteError> {
    let Value::Object(map) = serde_json::to_value(record)? else {
        return Ok(FrontMatter::new());
    };
    Ok(map
        .into_iter()
        .filter(|(_, v)| match v {
            Value::String(s) => !s.is_empty(),
            Value::Number(_) | Value::Bool(_) => true,
            Value::Null | Value::Array(_) | Value::Object(_) => false,
        })
        .collect())
}

fn body(record: &MediaRecord) -> String {
    let mut out = format!("# {}\n", record.title());

    let (tagline, description) = match record {
        MediaRecord::Book(b) => (None, b.description.as_deref()),
        MediaRecord::Movie(m) => (m.tagline.as_deref(), m.description.as_deref()),
        MediaRecord::TvShow(t) => (t.tagline.as_deref(), t.description.as_deref()),
        MediaRecord::VideoGame(g) => (None, g.description.as_deref()),
        MediaRecord::VinylRecord(_) => (None, None),
    };
    if let Some(tagline) = tagline.filter(|s| !s.is_empty()) {
        out.push_str(&format!("\n> {tagline}\n"));
    }
    if let Some(description) = description.filter(|s| !s.is_empty()) {
        out.push_str(&format!("\n{}\n", description.trim()));
    }

    match record {
        MediaRecord::Book(book) if !book.authors.is_empty() => {
            out.push_str(&format!("\n**Authors:** {}\n", book.display_authors()));
        }
        MediaRecord::VinylRecord(vinyl) => {
            if !vinyl.artists.is_empty() {
                out.push_str(&format!("\n**Artists:** {}\n", vinyl.display_artists()));
            }
            if !vinyl.tracklist.is_empty() {
                out.push_str("\n## Tracklist\n\n");
                for track in &vinyl.tracklist {
                    out.push_str(&format!("- {} {}", track.position, track.title));
                    if !track.duration.is_empty() {
                        out.push_str(&format!(" ({})", track.duration));
                    }
                    out.push('\n');
                }
            }
        }
        _ => {}
    }
    out
}

/// Render the full note: YAML front matter followed by the Markdown body.
pub fn render_note(record: &MediaRecord) -> Result<String, NoteError> {
    let yaml = serde_yml::to_string(&front_matter(record)?)?;
    let yaml = yaml.strip_prefix("---\n").unwrap_or(&yaml);
    Ok(format!("---\n{}---\n\n{}", yaml, body(record)))
}

/// Write a note, refusing to replace an existing file unless `overwrite` is set.
pub fn write_note(path: &Path, contents: &str, overwrite: bool) -> Result<(), NoteError> {
    if !overwrite && path.exists() {
        return Err(NoteError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| NoteError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, contents).map_err(|e| NoteError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
