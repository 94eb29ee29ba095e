use std::io::Write;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use vault_tools_config::{Config, LibraryDir};
use vault_tools_library::note::{render_note, write_note};
use vault_tools_library::reconcile::{first_same, list_alternative_names, writable};
use vault_tools_library::{AltNoteName, FsNoteStore, MediaKind, MediaRecord, merge_json, merge_records};

use crate::error::CliError;

fn library_dir_for(kind: MediaKind) -> LibraryDir {
    match kind {
        MediaKind::Book => LibraryDir::Books,
        MediaKind::Movie => LibraryDir::Movies,
        MediaKind::TvShow => LibraryDir::TvShows,
        MediaKind::VideoGame => LibraryDir::VideoGames,
        MediaKind::VinylRecord => LibraryDir::VinylRecords,
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::record(path, e))
}

fn load_record(path: &Path) -> Result<MediaRecord, CliError> {
    serde_json::from_value(read_json(path)?).map_err(|e| CliError::record(path, e))
}

fn flag(label: &str, on: bool) -> String {
    if on {
        format!("{}", label.if_supports_color(Stdout, |t| t.green()))
    } else {
        format!("{}", label.if_supports_color(Stdout, |t| t.dimmed()))
    }
}

fn log_candidates(names: &[AltNoteName]) {
    for (i, alt) in names.iter().enumerate() {
        log::info!(
            "  {}. {} [{} {}]",
            i + 1,
            alt.name.if_supports_color(Stdout, |t| t.bold()),
            flag(if alt.does_exist { "exists" } else { "free" }, !alt.does_exist),
            flag(if alt.is_same { "same" } else { "other" }, alt.is_same),
        );
        log::debug!("     {}", alt.path.display());
    }
}

/// List the candidate note names for a record.
pub(crate) fn run_library_names(config: &Config, record_path: &Path) -> Result<(), CliError> {
    let record = load_record(record_path)?;
    let dir = config.library_dir(library_dir_for(record.kind()))?;
    let names = list_alternative_names(&record, dir, &FsNoteStore);

    log::info!(
        "Candidate notes for {} in {}",
        record.kind().if_supports_color(Stdout, |t| t.bold()),
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log_candidates(&names);
    Ok(())
}

/// Numbered list shown before the name prompt.
fn choice_lines(free: &[&AltNoteName]) -> Vec<String> {
    let mut lines = vec!["Choose a name for the note:".to_string()];
    lines.extend(
        free.iter()
            .enumerate()
            .map(|(i, alt)| format!("  {}. {}", i + 1, alt.name)),
    );
    lines
}

/// Ask the user which free name to use. Empty input picks the first one.
fn choose_name<'a>(free: &[&'a AltNoteName]) -> Result<&'a AltNoteName, CliError> {
    if let [only] = free {
        return Ok(*only);
    }
    for line in choice_lines(free) {
        println!("{line}");
    }
    loop {
        print!("  Note name [1-{}, default 1]: ", free.len());
        std::io::stdout().flush()?;

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input)? == 0 {
            return Err(CliError::other("No note name chosen"));
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(free[0]);
        }
        match trimmed.parse::<usize>() {
            Ok(n) if (1..=free.len()).contains(&n) => return Ok(free[n - 1]),
            _ => println!(
                "    {}",
                "Please enter one of the listed numbers.".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }
}

/// Decide where the note goes.
///
/// An existing note for the same entity is reused silently. Otherwise the
/// user picks among the names that are still free, unless `overwrite`
/// targets the plain title.
fn choose_target(names: &[AltNoteName], overwrite: bool) -> Result<(PathBuf, bool), CliError> {
    if let Some(same) = first_same(names) {
        log::info!(
            "Updating existing note {}",
            same.name.if_supports_color(Stdout, |t| t.bold())
        );
        return Ok((same.path.clone(), true));
    }
    if overwrite {
        let canonical = names
            .first()
            .ok_or_else(|| CliError::other("Record has no usable title"))?;
        return Ok((canonical.path.clone(), true));
    }

    let free = writable(names);
    if free.is_empty() {
        return Err(CliError::other(
            "Every candidate name belongs to another note; use --overwrite to replace the first one",
        ));
    }
    Ok((choose_name(&free)?.path.clone(), false))
}

/// Reconcile a record with the library and write its note.
pub(crate) fn run_library_add(
    config: &Config,
    record_path: &Path,
    merge_path: Option<&Path>,
    dry_run: bool,
    overwrite: bool,
) -> Result<(), CliError> {
    let mut record = load_record(record_path)?;
    if let Some(other) = merge_path {
        record = merge_records(&record, &load_record(other)?)?;
        log::debug!("Merged {} into {}", other.display(), record_path.display());
    }

    let dir = config.library_dir(library_dir_for(record.kind()))?;
    let names = list_alternative_names(&record, dir, &FsNoteStore);
    log_candidates(&names);

    let (target, replace) = choose_target(&names, overwrite)?;
    let content = render_note(&record)?;

    if dry_run {
        log::info!(
            "Would write {}",
            target.display().if_supports_color(Stdout, |t| t.cyan())
        );
        println!("{content}");
        return Ok(());
    }

    write_note(&target, &content, replace)?;
    log::info!(
        "Note written to: {}",
        target.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Merge two record files and print the result.
pub(crate) fn run_library_merge(primary: &Path, secondary: &Path) -> Result<(), CliError> {
    let merged = merge_json(&read_json(primary)?, &read_json(secondary)?)?;
    let json = serde_json::to_string_pretty(&merged).map_err(|e| CliError::record(primary, e))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt(name: &str, does_exist: bool, is_same: bool) -> AltNoteName {
        AltNoteName {
            name: name.to_string(),
            path: PathBuf::from(format!("/lib/{name}.md")),
            does_exist,
            is_same,
        }
    }

    #[test]
    fn test_same_note_is_reused() {
        let names = [alt("Dark", true, false), alt("Dark (2017)", true, true)];
        let (path, replace) = choose_target(&names, false).unwrap();
        assert_eq!(path, PathBuf::from("/lib/Dark (2017).md"));
        assert!(replace);
    }

    #[test]
    fn test_single_free_name_needs_no_prompt() {
        let names = [alt("Dark", true, false), alt("Dark (2017)", false, false)];
        let (path, replace) = choose_target(&names, false).unwrap();
        assert_eq!(path, PathBuf::from("/lib/Dark (2017).md"));
        assert!(!replace);
    }

    #[test]
    fn test_overwrite_targets_plain_title() {
        let names = [alt("Dark", true, false), alt("Dark (2017)", false, false)];
        let (path, replace) = choose_target(&names, true).unwrap();
        assert_eq!(path, PathBuf::from("/lib/Dark.md"));
        assert!(replace);
    }

    #[test]
    fn test_all_taken_is_an_error() {
        let names = [alt("Dark", true, false)];
        assert!(matches!(
            choose_target(&names, false),
            Err(CliError::Other(_))
        ));
    }

    #[test]
    fn test_choices_are_numbered_from_one() {
        let names = [alt("Dark", false, false), alt("Dark (2017)", false, false)];
        let free = writable(&names);
        assert_eq!(
            choice_lines(&free),
            vec![
                "Choose a name for the note:".to_string(),
                "  1. Dark".to_string(),
                "  2. Dark (2017)".to_string(),
            ]
        );
    }

    #[test]
    fn test_every_kind_has_a_library_dir() {
        assert_eq!(library_dir_for(MediaKind::TvShow), LibraryDir::TvShows);
        assert_eq!(
            library_dir_for(MediaKind::VinylRecord).config_key(),
            "VINYL_RECORDS_DIR_PATH"
        );
    }
}
