//! Dashboard configuration.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. built-in defaults,
//! 2. a TOML file (`--config <path>`, or `crop-yield.toml` in the working
//!    directory when it exists),
//! 3. command-line flags.
//!
//! ```toml
//! [artifacts]
//! format = "json"
//! preprocessor = "artifacts/preprocessor.json"
//! model = "artifacts/model.json"
//! history = "data/yield_df.csv"
//!
//! [logging]
//! level = "debug"
//! file = "crop-yield.log"
//!
//! [window]
//! width = 1280
//! height = 900
//! theme = "dark"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use yield_core::ArtifactConfig;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "crop-yield.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub artifacts: ArtifactSection,
    pub logging: LoggingSection,
    pub window: WindowSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactSection {
    pub format: String,
    pub preprocessor: PathBuf,
    pub model: PathBuf,
    pub history: PathBuf,
}

impl Default for ArtifactSection {
    fn default() -> Self {
        let defaults = ArtifactConfig::default();
        Self {
            format: defaults.format,
            preprocessor: defaults.preprocessor_path,
            model: defaults.predictor_path,
            history: defaults.history_path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins over it.
    pub level: String,
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub width: f32,
    pub height: f32,
    pub theme: ThemePreference,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 800.0,
            theme: ThemePreference::Light,
        }
    }
}

/// Command-line values that replace whatever the file says.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub format: Option<String>,
    pub preprocessor: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub history: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub theme: Option<ThemePreference>,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if present,
    /// else returns the defaults.
    ///
    /// A missing `explicit` file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config =
            Self::from_toml_str(&text).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(format) = overrides.format {
            self.artifacts.format = format;
        }
        if let Some(path) = overrides.preprocessor {
            self.artifacts.preprocessor = path;
        }
        if let Some(path) = overrides.model {
            self.artifacts.model = path;
        }
        if let Some(path) = overrides.history {
            self.artifacts.history = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.log_file.is_some() {
            self.logging.file = overrides.log_file;
        }
        if let Some(theme) = overrides.theme {
            self.window.theme = theme;
        }
        self
    }

    pub fn artifact_config(&self) -> ArtifactConfig {
        ArtifactConfig {
            format: self.artifacts.format.clone(),
            preprocessor_path: self.artifacts.preprocessor.clone(),
            predictor_path: self.artifacts.model.clone(),
            history_path: self.artifacts.history.clone(),
        }
    }
}
