//! Startup glue between configuration and the artifact loaders.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use anyhow::{Context, Result};
use tracing::{debug, info};
use yield_core::ArtifactStore;

use crate::config::AppConfig;

/// Loads every artifact named by `config`.
///
/// Any failure here is fatal; the dashboard never starts without a complete
/// store.
pub async fn load_artifact_store(config: &AppConfig) -> Result<Arc<ArtifactStore>> {
    let artifacts = config.artifact_config();
    let registry = yield_data::build_registry();
    debug!(
        format = %artifacts.format,
        available = ?registry.available_formats(),
        "loading artifacts"
    );

    let store = yield_data::load_store(&registry, &artifacts)
        .await
        .with_context(|| {
            format!(
                "failed to load artifacts ({}, {}, {})",
                artifacts.preprocessor_path.display(),
                artifacts.predictor_path.display(),
                artifacts.history_path.display()
            )
        })?;

    info!(history_rows = store.history().len(), "artifact store ready");
    Ok(store)
}

/// Carries a failure out of the UI event loop so `main` can still exit with
/// an error once the loop returns.
#[derive(Clone, Default)]
pub struct StartupStatus(Rc<RefCell<Option<anyhow::Error>>>);

impl StartupStatus {
    /// Keeps the first failure; later ones are dropped.
    pub fn fail(&self, error: anyhow::Error) {
        let mut slot = self.0.borrow_mut();
        if slot.is_none() {
            *slot = Some(error);
        }
    }

    pub fn finish(self) -> Result<()> {
        let recorded = self.0.borrow_mut().take();
        match recorded {
            Some(error) => Err(error.context("the dashboard failed to start")),
            None => Ok(()),
        }
    }
}
