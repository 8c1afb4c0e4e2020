use std::{collections::HashMap, fmt, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;

use crate::pipeline::{Predictor, Preprocessor};

/// Failures while loading the startup artifacts. All of them are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArtifactLoadError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Cannot read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Malformed artifact {path}: {message}")]
    Format { path: PathBuf, message: String },
}

impl ArtifactLoadError {
    pub fn io(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn format(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        Self::Format {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Where the startup artifacts live and how they are encoded.
///
/// `format` must match the [`ArtifactLoader::format_name`] of a registered
/// loader. The paths are handed to that loader unchanged.
///
/// | format | preprocessor / predictor files |
/// |--------|--------------------------------|
/// | `json` | `preprocessor.json`, `model.json` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    pub format: String,
    pub preprocessor_path: PathBuf,
    pub predictor_path: PathBuf,
    pub history_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            preprocessor_path: PathBuf::from("preprocessor.json"),
            predictor_path: PathBuf::from("model.json"),
            history_path: PathBuf::from("yield_df.csv"),
        }
    }
}

/// The fitted pipeline produced by a loader.
#[derive(Clone)]
pub struct LoadedModels {
    pub preprocessor: Arc<dyn Preprocessor>,
    pub predictor: Arc<dyn Predictor>,
}

impl fmt::Debug for LoadedModels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModels").finish_non_exhaustive()
    }
}

/// One implementation per artifact encoding. Each data crate exports a unit
/// struct implementing this trait, registered with an
/// [`ArtifactLoaderRegistry`] at startup.
#[async_trait]
pub trait ArtifactLoader: Send + Sync {
    /// Unique, lowercase identifier for this encoding.
    fn format_name(&self) -> &'static str;

    /// Read and validate the preprocessor and predictor named by `config`.
    async fn load(&self, config: &ArtifactConfig) -> Result<LoadedModels, ArtifactLoadError>;
}

/// Registry of [`ArtifactLoader`] instances, keyed by format name.
pub struct ArtifactLoaderRegistry {
    loaders: HashMap<&'static str, Box<dyn ArtifactLoader>>,
}

impl ArtifactLoaderRegistry {
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
        }
    }

    /// Register a loader, replacing any previous one with the same name.
    pub fn register(&mut self, loader: Box<dyn ArtifactLoader>) {
        self.loaders.insert(loader.format_name(), loader);
    }

    /// Names of every registered format, sorted alphabetically.
    pub fn available_formats(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.loaders.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the loader matching `config.format`.
    ///
    /// # Errors
    /// * [`ArtifactLoadError::Configuration`] if no loader is registered for
    ///   the requested format.
    /// * Any error the chosen loader returns.
    pub async fn load(&self, config: &ArtifactConfig) -> Result<LoadedModels, ArtifactLoadError> {
        let loader = self.loaders.get(config.format.as_str()).ok_or_else(|| {
            ArtifactLoadError::Configuration(format!(
                "unknown artifact format '{}'; available: {:?}",
                config.format,
                self.available_formats()
            ))
        })?;

        tracing::debug!(format = loader.format_name(), "loading model artifacts");
        loader.load(config).await
    }
}

impl Default for ArtifactLoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
