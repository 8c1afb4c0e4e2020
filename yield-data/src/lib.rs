//! File-backed loading for the crop yield dashboard: the historical yield
//! CSV and the JSON-encoded fitted pipeline.

pub mod history;
pub mod json_artifacts;

use std::sync::Arc;

pub use history::HistoryLoadError;
pub use json_artifacts::JsonArtifactLoader;

use yield_core::artifacts::ArtifactLoaderRegistry;
use yield_core::{ArtifactConfig, ArtifactStore};

/// Registry with every artifact format this crate can read.
pub fn build_registry() -> ArtifactLoaderRegistry {
    let mut registry = ArtifactLoaderRegistry::new();
    registry.register(Box::new(JsonArtifactLoader));
    registry
}

/// Everything that can stop the artifact store from being built.
#[derive(Debug, thiserror::Error)]
pub enum StoreLoadError {
    #[error(transparent)]
    Artifacts(#[from] yield_core::ArtifactLoadError),

    #[error(transparent)]
    History(#[from] HistoryLoadError),
}

/// Load the fitted pipeline and the historical table named by `config`.
pub async fn load_store(
    registry: &ArtifactLoaderRegistry,
    config: &ArtifactConfig,
) -> Result<Arc<ArtifactStore>, StoreLoadError> {
    let models = registry.load(config).await?;

    let history_path = config.history_path.clone();
    let history = tokio::task::spawn_blocking(move || history::load_from_file(&history_path))
        .await
        .map_err(|e| {
            HistoryLoadError::Io {
                path: config.history_path.display().to_string(),
                source: std::io::Error::other(e),
            }
        })??;

    Ok(Arc::new(ArtifactStore::new(models, history)))
}
