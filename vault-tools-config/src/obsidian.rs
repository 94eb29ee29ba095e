//! Settings read from the vault's own `.obsidian` directory.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// The parts of Obsidian's configuration vault-tools cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObsidianConfig {
    /// Ids of the enabled core plugins (e.g. `daily-notes`).
    pub core_plugins_enabled: Vec<String>,
    /// moment.js pattern for daily note names.
    pub daily_note_format: Option<String>,
    /// Daily note folder, relative to the vault.
    pub daily_note_folder: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DailyNotesFile {
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    folder: Option<String>,
}

impl ObsidianConfig {
    /// Load the Obsidian configuration from a vault.
    ///
    /// Missing files simply leave the corresponding fields empty.
    pub fn from_vault(vault_path: &Path) -> Result<Self, ConfigError> {
        let dot_obsidian = vault_path.join(".obsidian");
        let mut config = Self::default();

        if let Some(value) = read_json::<serde_json::Value>(&dot_obsidian.join("core-plugins.json"))? {
            config.core_plugins_enabled = enabled_plugins(&value);
        }

        if let Some(daily) = read_json::<DailyNotesFile>(&dot_obsidian.join("daily-notes.json"))? {
            config.daily_note_format = daily.format.filter(|s| !s.is_empty());
            config.daily_note_folder = daily.folder.filter(|s| !s.is_empty());
        }

        log::debug!(
            "Loaded Obsidian config from {}: {} core plugins enabled",
            dot_obsidian.display(),
            config.core_plugins_enabled.len()
        );
        Ok(config)
    }

    pub fn is_plugin_enabled(&self, plugin: &str) -> bool {
        self.core_plugins_enabled.iter().any(|p| p == plugin)
    }
}

/// `core-plugins.json` is a list of ids in older vaults and an
/// `{id: enabled}` map in newer ones.
fn enabled_plugins(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        serde_json::Value::Object(map) => map
            .iter()
            .filter(|(_, enabled)| enabled.as_bool() == Some(true))
            .map(|(id, _)| id.clone())
            .collect(),
        _ => Vec::new(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enabled_plugins_list() {
        let value = json!(["daily-notes", "templates"]);
        assert_eq!(enabled_plugins(&value), vec!["daily-notes", "templates"]);
    }

    #[test]
    fn test_enabled_plugins_map() {
        let value = json!({"daily-notes": true, "templates": false, "outline": true});
        let mut plugins = enabled_plugins(&value);
        plugins.sort();
        assert_eq!(plugins, vec!["daily-notes", "outline"]);
    }

    #[test]
    fn test_enabled_plugins_unexpected_shape() {
        assert!(enabled_plugins(&json!("daily-notes")).is_empty());
    }
}
