pub(crate) mod bujo;
pub(crate) mod config;
pub(crate) mod daily_note;
pub(crate) mod format;
pub(crate) mod library;

/// Today's date in the local timezone.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
