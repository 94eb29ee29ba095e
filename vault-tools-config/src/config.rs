use std::path::{Path, PathBuf};

use serde::Deserialize;
use vault_tools_core::{WeekStart, format};

use crate::error::ConfigError;
use crate::obsidian::ObsidianConfig;
use crate::settings::resolve_config_path;

/// Core plugin that must be enabled before bullet-journal logs are built.
pub const DAILY_NOTES_PLUGIN: &str = "daily-notes";

/// The library sub-directories a record can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryDir {
    Books,
    Movies,
    TvShows,
    VideoGames,
    VinylRecords,
}

impl LibraryDir {
    pub const ALL: [LibraryDir; 5] = [
        LibraryDir::Books,
        LibraryDir::Movies,
        LibraryDir::TvShows,
        LibraryDir::VideoGames,
        LibraryDir::VinylRecords,
    ];

    /// Name of the config key holding this directory.
    pub fn config_key(self) -> &'static str {
        match self {
            LibraryDir::Books => "BOOKS_DIR_PATH",
            LibraryDir::Movies => "MOVIES_DIR_PATH",
            LibraryDir::TvShows => "TV_SHOWS_DIR_PATH",
            LibraryDir::VideoGames => "VIDEO_GAMES_DIR_PATH",
            LibraryDir::VinylRecords => "VINYL_RECORDS_DIR_PATH",
        }
    }
}

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
struct RawConfig {
    vault_path: Option<PathBuf>,
    monthly_note_format: Option<String>,
    monthly_note_folder: Option<PathBuf>,
    weekly_note_format: Option<String>,
    weekly_note_folder: Option<PathBuf>,
    week_start: Option<WeekStart>,
    library_dir_path: Option<PathBuf>,
    books_dir_path: Option<PathBuf>,
    movies_dir_path: Option<PathBuf>,
    tv_shows_dir_path: Option<PathBuf>,
    video_games_dir_path: Option<PathBuf>,
    vinyl_records_dir_path: Option<PathBuf>,
}

/// Fully resolved configuration.
///
/// Folder settings are joined onto the vault (library sub-directories onto
/// the library directory) so every path here can be used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub vault_path: PathBuf,
    pub obsidian: ObsidianConfig,
    pub week_start: WeekStart,
    pub monthly_note_format: Option<String>,
    pub monthly_note_folder: Option<PathBuf>,
    pub weekly_note_format: Option<String>,
    pub weekly_note_folder: Option<PathBuf>,
    pub library_dir_path: Option<PathBuf>,
    pub books_dir_path: Option<PathBuf>,
    pub movies_dir_path: Option<PathBuf>,
    pub tv_shows_dir_path: Option<PathBuf>,
    pub video_games_dir_path: Option<PathBuf>,
    pub vinyl_records_dir_path: Option<PathBuf>,
}

impl Config {
    /// Locate the config file (see [`resolve_config_path`]) and load it.
    pub fn load(cli_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = resolve_config_path(cli_override).ok_or(ConfigError::NoConfigPath)?;
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&contents, base_dir).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse config text; a relative `VAULT_PATH` is resolved against `base_dir`.
    pub fn from_toml_str(contents: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;

        let vault_path = base_dir.join(raw.vault_path.ok_or(ConfigError::MissingKey("VAULT_PATH"))?);
        if !vault_path.is_dir() {
            return Err(ConfigError::DirNotFound {
                key: "VAULT_PATH",
                path: vault_path,
            });
        }
        let obsidian = ObsidianConfig::from_vault(&vault_path)?;

        let in_vault = |p: Option<PathBuf>| p.map(|p| vault_path.join(p));
        let library_dir_path = in_vault(raw.library_dir_path);
        let library_root = library_dir_path.clone().unwrap_or_else(|| vault_path.clone());
        let in_library = |p: Option<PathBuf>| p.map(|p| library_root.join(p));

        Ok(Self {
            week_start: raw.week_start.unwrap_or_default(),
            monthly_note_format: raw.monthly_note_format.filter(|s| !s.is_empty()),
            monthly_note_folder: in_vault(raw.monthly_note_folder),
            weekly_note_format: raw.weekly_note_format.filter(|s| !s.is_empty()),
            weekly_note_folder: in_vault(raw.weekly_note_folder),
            books_dir_path: in_library(raw.books_dir_path),
            movies_dir_path: in_library(raw.movies_dir_path),
            tv_shows_dir_path: in_library(raw.tv_shows_dir_path),
            video_games_dir_path: in_library(raw.video_games_dir_path),
            vinyl_records_dir_path: in_library(raw.vinyl_records_dir_path),
            library_dir_path,
            obsidian,
            vault_path,
        })
    }

    /// Check everything the bullet-journal commands depend on.
    pub fn require_bujo(&self) -> Result<(), ConfigError> {
        let format = self
            .monthly_note_format
            .as_deref()
            .ok_or(ConfigError::MissingKey("MONTHLY_NOTE_FORMAT"))?;
        format::validate(format).map_err(|source| ConfigError::InvalidFormat {
            key: "MONTHLY_NOTE_FORMAT",
            source,
        })?;
        if let Some(weekly) = self.weekly_note_format.as_deref() {
            format::validate(weekly).map_err(|source| ConfigError::InvalidFormat {
                key: "WEEKLY_NOTE_FORMAT",
                source,
            })?;
        }
        if self.monthly_note_folder.is_none() {
            return Err(ConfigError::MissingKey("MONTHLY_NOTE_FOLDER"));
        }
        if !self.obsidian.is_plugin_enabled(DAILY_NOTES_PLUGIN) {
            return Err(ConfigError::PluginNotFound(DAILY_NOTES_PLUGIN.to_string()));
        }
        Ok(())
    }

    /// The configured directory for `dir`, which must exist.
    pub fn library_dir(&self, dir: LibraryDir) -> Result<&Path, ConfigError> {
        let path = self
            .library_dir_setting(dir)
            .ok_or(ConfigError::MissingKey(dir.config_key()))?;
        if !path.is_dir() {
            return Err(ConfigError::DirNotFound {
                key: dir.config_key(),
                path: path.to_path_buf(),
            });
        }
        Ok(path)
    }

    /// The configured directory for `dir`, without checking the filesystem.
    pub fn library_dir_setting(&self, dir: LibraryDir) -> Option<&Path> {
        match dir {
            LibraryDir::Books => self.books_dir_path.as_deref(),
            LibraryDir::Movies => self.movies_dir_path.as_deref(),
            LibraryDir::TvShows => self.tv_shows_dir_path.as_deref(),
            LibraryDir::VideoGames => self.video_games_dir_path.as_deref(),
            LibraryDir::VinylRecords => self.vinyl_records_dir_path.as_deref(),
        }
    }

    /// Key/value pairs for display, in config-file spelling.
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        let path = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string());
        let mut entries = vec![
            ("VAULT_PATH", Some(self.vault_path.display().to_string())),
            ("MONTHLY_NOTE_FORMAT", self.monthly_note_format.clone()),
            ("MONTHLY_NOTE_FOLDER", path(&self.monthly_note_folder)),
            ("WEEKLY_NOTE_FORMAT", self.weekly_note_format.clone()),
            ("WEEKLY_NOTE_FOLDER", path(&self.weekly_note_folder)),
            ("WEEK_START", Some(self.week_start.as_str().to_string())),
            ("LIBRARY_DIR_PATH", path(&self.library_dir_path)),
        ];
        for dir in LibraryDir::ALL {
            entries.push((
                dir.config_key(),
                self.library_dir_setting(dir).map(|p| p.display().to_string()),
            ));
        }
        entries
    }
}
