//! Date formatting, calendar arithmetic, and text helpers shared by every
//! vault-tools crate.
//!
//! Nothing in here touches the file system. Callers hand in already-resolved
//! values (a format pattern from the config, a date from the CLI) and get
//! plain strings or dates back.

pub mod clock;
pub mod error;
pub mod format;
pub mod humanize;

pub use clock::WeekStart;
pub use error::{ClockError, FormatError};
pub use format::{CalendarValue, Segment, Token};
