//! Normalized catalog records.
//!
//! Records are source-agnostic: whichever catalog produced them, they carry
//! the same display fields plus the identifiers of every source they were
//! seen in. Identifiers are only used to recognise existing notes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use vault_tools_core::humanize::and_join;

// ── Shared ──────────────────────────────────────────────────────────────────

/// A credited person (author, artist).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One source-specific identifier in string form, e.g. `("tmdb_id", "603")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceId {
    pub key: &'static str,
    pub value: String,
}

impl SourceId {
    fn collect(pairs: &[(&'static str, Option<String>)]) -> Vec<SourceId> {
        pairs
            .iter()
            .filter_map(|(key, value)| {
                value.as_ref().map(|v| SourceId {
                    key: *key,
                    value: v.clone(),
                })
            })
            .collect()
    }
}

/// Records that can be recognised by their source identifiers.
pub trait SourceIds {
    /// The identifiers present on this record. Absent ones are skipped.
    fn source_ids(&self) -> Vec<SourceId>;
}

/// What a note for the record can be called.
pub trait NoteName {
    fn title(&self) -> &str;

    /// Release year, used to disambiguate remakes and re-issues.
    fn year(&self) -> Option<i32> {
        None
    }

    /// Country of origin, already joined for display.
    fn origin(&self) -> Option<String> {
        None
    }
}

fn join_countries(countries: &[String]) -> Option<String> {
    if countries.is_empty() {
        None
    } else {
        Some(and_join(countries))
    }
}

// ── Book ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub number_of_pages: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub google_book_id: Option<String>,
    #[serde(default)]
    pub openlibrary_book_id: Option<String>,
}

impl Book {
    pub fn display_authors(&self) -> String {
        and_join(&self.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>())
    }
}

impl SourceIds for Book {
    fn source_ids(&self) -> Vec<SourceId> {
        SourceId::collect(&[
            ("google_book_id", self.google_book_id.clone()),
            ("openlibrary_book_id", self.openlibrary_book_id.clone()),
            ("isbn", self.isbn.clone()),
        ])
    }
}

impl NoteName for Book {
    fn title(&self) -> &str {
        &self.title
    }
}

// ── Movie ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub production_countries: Vec<String>,
    #[serde(default)]
    pub tmdb_id: Option<u64>,
    #[serde(default)]
    pub imdb_id: Option<String>,
}

impl SourceIds for Movie {
    fn source_ids(&self) -> Vec<SourceId> {
        SourceId::collect(&[
            ("tmdb_id", self.tmdb_id.map(|id| id.to_string())),
            ("imdb_id", self.imdb_id.clone()),
        ])
    }
}

impl NoteName for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }

    fn origin(&self) -> Option<String> {
        join_countries(&self.production_countries)
    }
}

// ── TV show ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvShow {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<NaiveDate>,
    #[serde(default)]
    pub origin_countries: Vec<String>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
    #[serde(default)]
    pub tmdb_id: Option<u64>,
}

impl SourceIds for TvShow {
    fn source_ids(&self) -> Vec<SourceId> {
        SourceId::collect(&[("tmdb_id", self.tmdb_id.map(|id| id.to_string()))])
    }
}

impl NoteName for TvShow {
    fn title(&self) -> &str {
        &self.title
    }

    fn year(&self) -> Option<i32> {
        self.first_air_date.map(|d| d.year())
    }

    fn origin(&self) -> Option<String> {
        join_countries(&self.origin_countries)
    }
}

// ── Video game ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoGame {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub first_release_date: Option<NaiveDate>,
    #[serde(default)]
    pub igdb_id: Option<u64>,
    #[serde(default)]
    pub steam_id: Option<u64>,
}

impl SourceIds for VideoGame {
    fn source_ids(&self) -> Vec<SourceId> {
        SourceId::collect(&[
            ("igdb_id", self.igdb_id.map(|id| id.to_string())),
            ("steam_id", self.steam_id.map(|id| id.to_string())),
        ])
    }
}

impl NoteName for VideoGame {
    fn title(&self) -> &str {
        &self.title
    }

    fn year(&self) -> Option<i32> {
        self.first_release_date.map(|d| d.year())
    }
}

// ── Vinyl record ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinylRecordTrack {
    pub title: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinylRecord {
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Person>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tracklist: Vec<VinylRecordTrack>,
    #[serde(default)]
    pub discogs_id: Option<u64>,
}

impl VinylRecord {
    pub fn display_artists(&self) -> String {
        and_join(&self.artists.iter().map(|a| a.name.as_str()).collect::<Vec<_>>())
    }
}

impl SourceIds for VinylRecord {
    fn source_ids(&self) -> Vec<SourceId> {
        SourceId::collect(&[("discogs_id", self.discogs_id.map(|id| id.to_string()))])
    }
}

impl NoteName for VinylRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn year(&self) -> Option<i32> {
        self.year
    }

    fn origin(&self) -> Option<String> {
        self.country.clone().filter(|c| !c.is_empty())
    }
}

// ── MediaRecord ─────────────────────────────────────────────────────────────

/// The kind of a [`MediaRecord`], matching its serialized `kind` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Book,
    Movie,
    TvShow,
    VideoGame,
    VinylRecord,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Book => "book",
            MediaKind::Movie => "movie",
            MediaKind::TvShow => "tv_show",
            MediaKind::VideoGame => "video_game",
            MediaKind::VinylRecord => "vinyl_record",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any catalog record, tagged by `kind` when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRecord {
    Book(Book),
    Movie(Movie),
    TvShow(TvShow),
    VideoGame(VideoGame),
    VinylRecord(VinylRecord),
}

impl MediaRecord {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaRecord::Book(_) => MediaKind::Book,
            MediaRecord::Movie(_) => MediaKind::Movie,
            MediaRecord::TvShow(_) => MediaKind::TvShow,
            MediaRecord::VideoGame(_) => MediaKind::VideoGame,
            MediaRecord::VinylRecord(_) => MediaKind::VinylRecord,
        }
    }

    fn as_note_name(&self) -> &dyn NoteName {
        match self {
            MediaRecord::Book(r) => r,
            MediaRecord::Movie(r) => r,
            MediaRecord::TvShow(r) => r,
            MediaRecord::VideoGame(r) => r,
            MediaRecord::VinylRecord(r) => r,
        }
    }
}

impl SourceIds for MediaRecord {
    fn source_ids(&self) -> Vec<SourceId> {
        match self {
            MediaRecord::Book(r) => r.source_ids(),
            MediaRecord::Movie(r) => r.source_ids(),
            MediaRecord::TvShow(r) => r.source_ids(),
            MediaRecord::VideoGame(r) => r.source_ids(),
            MediaRecord::VinylRecord(r) => r.source_ids(),
        }
    }
}

impl NoteName for MediaRecord {
    fn title(&self) -> &str {
        self.as_note_name().title()
    }

    fn year(&self) -> Option<i32> {
        self.as_note_name().year()
    }

    fn origin(&self) -> Option<String> {
        self.as_note_name().origin()
    }
}
