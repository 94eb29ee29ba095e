//! Matching freshly loaded records against notes already in the vault.
//!
//! A record may already have a note under its plain title, or under a
//! disambiguated name such as `Title (1999)`. [`list_alternative_names`]
//! lists those candidates with whether each file exists and whether it
//! describes the same entity, so the caller can reuse a note, pick a free
//! name, or ask the user.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::frontmatter::{self, FrontMatter};
use crate::models::{NoteName, SourceIds};
use crate::naming::note_path;

/// Read access to notes on disk.
pub trait NoteStore {
    fn exists(&self, path: &Path) -> bool;

    /// Contents of the note, or `Ok(None)` if there is no such file.
    fn read(&self, path: &Path) -> std::io::Result<Option<String>>;
}

/// [`NoteStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsNoteStore;

impl NoteStore for FsNoteStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// A candidate note name for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltNoteName {
    pub name: String,
    pub path: PathBuf,
    pub does_exist: bool,
    /// The existing note's identifiers match the record.
    pub is_same: bool,
}

/// Does the front matter describe the same entity as `record`?
///
/// Any single matching identifier is enough.
pub fn is_same_entity(record: &impl SourceIds, front_matter: &FrontMatter) -> bool {
    record.source_ids().iter().any(|id| {
        front_matter
            .get(id.key)
            .is_some_and(|value| value_matches(value, &id.value))
    })
}

fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::Array(items) => items
            .iter()
            .any(|item| scalar_string(item).is_some_and(|s| s == expected)),
        other => scalar_string(other).is_some_and(|s| s == expected),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Candidate names for the record, most preferred first.
fn candidate_names(record: &impl NoteName) -> Vec<String> {
    let title = record.title();
    let mut names = vec![title.to_string()];
    if let Some(year) = record.year() {
        names.push(format!("{title} ({year})"));
    }
    if let Some(origin) = record.origin() {
        names.push(format!("{title} ({origin})"));
    }
    names
}

/// List the names a note for `record` could have in `dir`.
///
/// Unreadable notes and notes without usable front matter are reported as
/// existing but not the same entity.
pub fn list_alternative_names<R, S>(record: &R, dir: &Path, store: &S) -> Vec<AltNoteName>
where
    R: NoteName + SourceIds,
    S: NoteStore + ?Sized,
{
    candidate_names(record)
        .into_iter()
        .map(|name| {
            let path = note_path(dir, &name);
            let does_exist = store.exists(&path);
            let is_same = does_exist && note_matches(record, &path, store);
            AltNoteName {
                name,
                path,
                does_exist,
                is_same,
            }
        })
        .collect()
}

fn note_matches<S: NoteStore + ?Sized>(record: &impl SourceIds, path: &Path, store: &S) -> bool {
    let contents = match store.read(path) {
        Ok(Some(contents)) => contents,
        Ok(None) => return false,
        Err(e) => {
            log::warn!("Could not read {}: {e}", path.display());
            return false;
        }
    };
    match frontmatter::extract(&contents) {
        Ok(Some(fm)) => is_same_entity(record, &fm),
        Ok(None) => {
            log::debug!("{} has no front matter", path.display());
            false
        }
        Err(e) => {
            log::warn!("Ignoring front matter of {}: {e}", path.display());
            false
        }
    }
}

/// The first candidate whose note already describes the record.
pub fn first_same(names: &[AltNoteName]) -> Option<&AltNoteName> {
    names.iter().find(|n| n.is_same)
}

/// Candidates that can be written without replacing anything.
pub fn writable(names: &[AltNoteName]) -> Vec<&AltNoteName> {
    names.iter().filter(|n| !n.does_exist).collect()
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
