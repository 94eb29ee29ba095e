//! Configuration for vault-tools: the TOML settings file plus whatever the
//! vault itself says about its Obsidian setup.
//!
//! Every path in [`Config`] is absolute (or at least resolved against the
//! config file) by the time loading returns, so callers never join paths
//! against the vault themselves.

pub mod config;
pub mod error;
pub mod obsidian;
pub mod settings;

pub use config::{Config, LibraryDir};
pub use error::ConfigError;
pub use obsidian::ObsidianConfig;
pub use settings::{config_path, resolve_config_path};
