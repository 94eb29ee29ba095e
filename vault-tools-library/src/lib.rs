//! Media library notes: normalized catalog records, merging partial records,
//! and deciding which note in the vault a record belongs to.

pub mod error;
pub mod frontmatter;
pub mod merge;
pub mod models;
pub mod naming;
pub mod note;
pub mod reconcile;

pub use error::{FrontMatterError, MergeError, NoteError};
pub use frontmatter::FrontMatter;
pub use merge::{Merge, merge_json, merge_records};
pub use models::{
    Book, MediaKind, MediaRecord, Movie, NoteName, Person, SourceId, SourceIds, TvShow, VideoGame,
    VinylRecord, VinylRecordTrack,
};
pub use reconcile::{AltNoteName, FsNoteStore, NoteStore};
