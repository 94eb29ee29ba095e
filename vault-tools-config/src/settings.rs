//! Location of the config file.
//!
//! The config file is `~/.config/vault-tools/config.toml` unless the CLI or
//! the `VAULT_TOOLS_CONFIG` environment variable says otherwise.

use std::path::PathBuf;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "VAULT_TOOLS_CONFIG";

/// Canonical path to the config file, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vault-tools").join("config.toml"))
}

/// Resolve the config file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `$VAULT_TOOLS_CONFIG`
/// 3. [`config_path`]
pub fn resolve_config_path(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_override {
        return Some(p);
    }
    if let Some(p) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(p));
    }
    config_path()
}
