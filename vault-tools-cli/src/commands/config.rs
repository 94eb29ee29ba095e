use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use vault_tools_config::{Config, resolve_config_path};

use crate::error::CliError;

/// Show the config file location and every resolved setting.
pub(crate) fn run_config_show(cli_override: Option<PathBuf>) -> Result<(), CliError> {
    log::info!(
        "{}",
        "vault-tools Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    let path = resolve_config_path(cli_override).ok_or_else(|| {
        CliError::other("Could not determine the configuration file location")
    })?;
    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    log::info!("");

    let config = Config::from_file(&path)?;
    let width = config
        .entries()
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);
    for (key, value) in config.entries() {
        match value {
            Some(v) => log::info!("  {key:<width$}  {v}"),
            None => log::info!(
                "  {key:<width$}  {}",
                "(not set)".if_supports_color(Stdout, |t| t.dimmed())
            ),
        }
    }

    let plugins = &config.obsidian.core_plugins_enabled;
    log::info!("");
    log::info!(
        "  Obsidian core plugins: {}",
        if plugins.is_empty() {
            "(none)".to_string()
        } else {
            plugins.join(", ")
        }
    );
    if let Some(format) = &config.obsidian.daily_note_format {
        log::info!("  Daily note format: {format}");
    }
    if let Some(folder) = &config.obsidian.daily_note_folder {
        log::info!("  Daily note folder: {folder}");
    }
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path(cli_override: Option<PathBuf>) -> Result<(), CliError> {
    match resolve_config_path(cli_override) {
        Some(p) => {
            println!("{}", p.display());
            Ok(())
        }
        None => Err(CliError::other(
            "Could not determine config directory",
        )),
    }
}
