use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;

/// Archive queried when the config file names none.
pub const DEFAULT_ARCHIVE_URL: &str = "https://swapi.dev/api/";

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

fn default_ranges() -> Vec<String> {
    ["1-5", "6-11", "12-17"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// User configuration, read from `~/.datapad/config.toml`.
///
/// Every section is optional; a missing file or missing section falls back
/// to defaults so the binary always starts.
#[derive(Debug, Default, Deserialize)]
pub struct DatapadConfig {
    pub app: Option<AppConfig>,
    pub archive: Option<ArchiveConfig>,
    /// Hover targets shown in the sidebar, as `start-end` labels.
    pub ranges: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Start with the hover chime muted.
    #[serde(default = "default_true")]
    pub start_muted: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_contrast: false,
            start_muted: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ArchiveConfig {
    pub base_url: Option<String>,
}

impl DatapadConfig {
    /// Default config file location, `None` when no home directory exists.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".datapad").join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn ranges(&self) -> Vec<String> {
        self.ranges.clone().unwrap_or_else(default_ranges)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.archive
            .as_ref()
            .and_then(|archive| archive.base_url.as_deref())
            .unwrap_or(DEFAULT_ARCHIVE_URL)
    }

    #[must_use]
    pub fn high_contrast(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.high_contrast)
    }

    #[must_use]
    pub fn start_muted(&self) -> bool {
        self.app.as_ref().map_or(true, |app| app.start_muted)
    }
}
