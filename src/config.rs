//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file used when neither `--config` nor `XO_CONFIG` is given.
pub const DEFAULT_CONFIG_FILE: &str = "xo.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "XO_CONFIG";

/// How cells are numbered for the player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IndexBase {
    /// Cells 0-8, matching the engine.
    #[default]
    Zero,
    /// Cells 1-9, matching a phone keypad.
    One,
}

impl IndexBase {
    /// Number shown for engine index 0.
    pub fn offset(self) -> usize {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Engine index for a cell number typed by the player.
    pub fn to_index(self, number: usize) -> Option<usize> {
        number.checked_sub(self.offset())
    }

    /// Cell number shown to the player for an engine index.
    pub fn to_number(self, index: usize) -> usize {
        index + self.offset()
    }
}

/// Configuration for the `xo` front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct XoConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Cell numbering for input and for empty-cell labels.
    index_base: IndexBase,

    /// Explain rejected moves instead of silently ignoring them.
    report_rejections: bool,
}

impl Default for XoConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            index_base: IndexBase::Zero,
            report_rejections: true,
        }
    }
}

impl XoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves and loads the configuration.
    ///
    /// A path named by `--config` or `XO_CONFIG` must exist. Only the
    /// implicit `xo.toml` falls back to the defaults when missing.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve(explicit, std::env::var_os(CONFIG_ENV_VAR))
    }

    fn resolve(explicit: Option<&Path>, from_env: Option<OsString>) -> Result<Self, ConfigError> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| from_env.map(PathBuf::from));

        let path = match named {
            Some(path) => path,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    debug!(path = %path.display(), "No config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let config = Self::from_file(&path)?;
        info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Returns a copy with a different cell numbering.
    pub fn with_index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
