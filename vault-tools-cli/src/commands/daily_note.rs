use chrono::NaiveDate;
use vault_tools_bujo::daily_log_file_path;
use vault_tools_config::Config;

use crate::commands::today;
use crate::error::CliError;

pub(crate) fn run_daily_note(config: &Config, date: Option<NaiveDate>) -> Result<(), CliError> {
    let date = date.unwrap_or_else(today);
    let path = daily_log_file_path(date, config)?;
    if !path.exists() {
        log::debug!("{} does not exist yet", path.display());
    }
    println!("{}", path.display());
    Ok(())
}
