//! Combining partial records of the same entity.
//!
//! The primary record wins wherever it has a value. Missing optional fields
//! and empty strings are filled from the secondary record, nested records are
//! merged field by field, and lists become the union of both sides.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::MergeError;
use crate::models::{Book, MediaRecord, Movie, Person, TvShow, VideoGame, VinylRecord, VinylRecordTrack};

/// Produce a new value combining `self` (primary) with `other`.
pub trait Merge {
    fn merge(&self, other: &Self) -> Self;
}

macro_rules! impl_merge_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Merge for $ty {
                fn merge(&self, _other: &Self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_merge_scalar!(u32, u64, i32, NaiveDate);

impl Merge for String {
    fn merge(&self, other: &Self) -> Self {
        if self.is_empty() {
            other.clone()
        } else {
            self.clone()
        }
    }
}

impl<T: Merge + Clone> Merge for Option<T> {
    fn merge(&self, other: &Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.merge(b)),
            (Some(a), None) => Some(a.clone()),
            (None, b) => b.clone(),
        }
    }
}

impl<T: PartialEq + Clone> Merge for Vec<T> {
    fn merge(&self, other: &Self) -> Self {
        let mut merged: Vec<T> = Vec::with_capacity(self.len() + other.len());
        for item in self.iter().chain(other) {
            if !merged.contains(item) {
                merged.push(item.clone());
            }
        }
        merged
    }
}

/// Implement [`Merge`] for a record struct by merging each listed field.
macro_rules! impl_merge {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl Merge for $ty {
            fn merge(&self, other: &Self) -> Self {
                Self {
                    $($field: self.$field.merge(&other.$field),)*
                }
            }
        }
    };
}

impl_merge!(Person { name });

impl_merge!(Book {
    title,
    authors,
    number_of_pages,
    description,
    isbn,
    cover_url,
    google_book_id,
    openlibrary_book_id,
});

impl_merge!(Movie {
    title,
    tagline,
    description,
    cover_url,
    release_date,
    production_countries,
    tmdb_id,
    imdb_id,
});

impl_merge!(TvShow {
    title,
    tagline,
    description,
    cover_url,
    first_air_date,
    origin_countries,
    number_of_seasons,
    tmdb_id,
});

impl_merge!(VideoGame {
    title,
    description,
    cover_url,
    first_release_date,
    igdb_id,
    steam_id,
});

impl_merge!(VinylRecordTrack {
    title,
    position,
    duration,
});

impl_merge!(VinylRecord {
    title,
    artists,
    year,
    country,
    isbn,
    image_url,
    tracklist,
    discogs_id,
});

/// Merge two records of the same kind.
pub fn merge_records(primary: &MediaRecord, secondary: &MediaRecord) -> Result<MediaRecord, MergeError> {
    Ok(match (primary, secondary) {
        (MediaRecord::Book(a), MediaRecord::Book(b)) => MediaRecord::Book(a.merge(b)),
        (MediaRecord::Movie(a), MediaRecord::Movie(b)) => MediaRecord::Movie(a.merge(b)),
        (MediaRecord::TvShow(a), MediaRecord::TvShow(b)) => MediaRecord::TvShow(a.merge(b)),
        (MediaRecord::VideoGame(a), MediaRecord::VideoGame(b)) => MediaRecord::VideoGame(a.merge(b)),
        (MediaRecord::VinylRecord(a), MediaRecord::VinylRecord(b)) => {
            MediaRecord::VinylRecord(a.merge(b))
        }
        (a, b) => {
            return Err(MergeError::IncompatibleTypes {
                primary: a.kind().to_string(),
                secondary: b.kind().to_string(),
            });
        }
    })
}

/// Merge two JSON documents holding `kind`-tagged records.
pub fn merge_json(primary: &Value, secondary: &Value) -> Result<MediaRecord, MergeError> {
    let a = as_record(primary);
    let b = as_record(secondary);
    match (a, b) {
        (Some(a), Some(b)) => merge_records(&a, &b),
        (a, b) => Err(MergeError::IncompatibleTypes {
            primary: kind_label(a.as_ref()),
            secondary: kind_label(b.as_ref()),
        }),
    }
}

fn as_record(value: &Value) -> Option<MediaRecord> {
    match serde_json::from_value(value.clone()) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("Document is not a media record: {e}");
            None
        }
    }
}

fn kind_label(record: Option<&MediaRecord>) -> String {
    record.map_or_else(|| "non-record".to_string(), |r| r.kind().to_string())
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod tests;
