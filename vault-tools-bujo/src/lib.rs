//! Bullet-journal logs: the days, weeks and months of a journal, where their
//! notes live in the vault, and the monthly/weekly log notes linking them.

pub mod error;
pub mod log_note;
pub mod paths;
pub mod period;

pub use error::BujoError;
pub use log_note::{build_monthly_log_note, build_weekly_log_note, write_log_note};
pub use paths::{daily_log_file_path, monthly_log_file_path, weekly_log_file_path};
pub use period::{Day, Month, Week, parse_month, parse_week};
