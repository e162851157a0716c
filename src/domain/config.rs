use std::{
    io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Survey-wide settings, stored as `fern.toml` at the survey root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Steward name stamped onto every form of a newly created plot.
    ///
    /// Empty means no steward is pre-filled.
    pub default_steward: String,

    /// Directory holding the plot directories, scanned by `list` when no
    /// directory argument is given.
    ///
    /// Relative paths are resolved against the survey root. Absent means
    /// the survey root itself.
    pub plot_dirs: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or if the TOML
    /// content is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot be serialized to
    /// TOML or if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Errors produced while loading or saving the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file was missing, unreadable, or not UTF-8.
    #[error("failed to read config file {}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The file's content was not a valid configuration.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// The file that could not be parsed.
        path: PathBuf,
        /// The TOML-level failure.
        source: toml::de::Error,
    },
    /// The configuration could not be serialized.
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    /// The file could not be written.
    #[error("failed to write config file {}", path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default, skip_serializing_if = "String::is_empty")]
        default_steward: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plot_dirs: Option<PathBuf>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                default_steward,
                plot_dirs,
            } => Self {
                default_steward,
                plot_dirs,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            default_steward: config.default_steward,
            plot_dirs: config.plot_dirs,
        }
    }
}
