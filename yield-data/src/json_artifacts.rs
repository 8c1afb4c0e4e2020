//! JSON encoding of the fitted preprocessor and regressor.
//!
//! ## `preprocessor.json`
//!
//! ```json
//! {
//!   "transformers": [
//!     { "name": "onehotencoder",
//!       "transformer": { "kind": "one_hot_encoder", "categories": [["Albania", "India"], ["Maize", "Rice"]] },
//!       "columns": ["Area", "Item"] },
//!     { "name": "standardscaler",
//!       "transformer": { "kind": "standard_scaler", "mean": [2001.5], "scale": [7.0] },
//!       "columns": ["Year"] }
//!   ],
//!   "categories": { "regions": ["Albania", "India"], "crops": ["Maize", "Rice"] }
//! }
//! ```
//!
//! `categories` is optional; without it the dashboard inspects the encoders.
//!
//! ## `model.json`
//!
//! ```json
//! { "kind": "linear", "coefficients": [0.1, 0.2, 0.3, 0.4, 0.5], "intercept": 1.0 }
//! ```
//!
//! or a `decision_tree` with `n_features` and a flat `nodes` list.

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use tracing::info;
use yield_core::pipeline::{ColumnTransformer, FittedRegressor};
use yield_core::{ArtifactConfig, ArtifactLoadError, ArtifactLoader, LoadedModels};

/// Parse and validate a preprocessor document.
pub fn parse_preprocessor(path: &Path, text: &str) -> Result<ColumnTransformer, ArtifactLoadError> {
    let transformer: ColumnTransformer =
        serde_json::from_str(text).map_err(|e| ArtifactLoadError::format(path, e))?;
    transformer
        .validate()
        .map_err(|e| ArtifactLoadError::format(path, e))?;
    Ok(transformer)
}

/// Parse and validate a regressor document.
pub fn parse_predictor(path: &Path, text: &str) -> Result<FittedRegressor, ArtifactLoadError> {
    let model: FittedRegressor =
        serde_json::from_str(text).map_err(|e| ArtifactLoadError::format(path, e))?;
    model
        .validate()
        .map_err(|e| ArtifactLoadError::format(path, e))?;
    Ok(model)
}

async fn read(path: &Path) -> Result<String, ArtifactLoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ArtifactLoadError::io(path, e))
}

pub struct JsonArtifactLoader;

#[async_trait]
impl ArtifactLoader for JsonArtifactLoader {
    fn format_name(&self) -> &'static str {
        "json"
    }

    async fn load(&self, config: &ArtifactConfig) -> Result<LoadedModels, ArtifactLoadError> {
        let (pre_text, model_text) =
            tokio::try_join!(read(&config.preprocessor_path), read(&config.predictor_path))?;

        let preprocessor = parse_preprocessor(&config.preprocessor_path, &pre_text)?;
        let predictor = parse_predictor(&config.predictor_path, &model_text)?;

        let produced = preprocessor.n_features_out();
        let expected = predictor.n_features();
        if produced != expected {
            return Err(ArtifactLoadError::format(
                &config.predictor_path,
                format!("model expects {expected} features but the preprocessor produces {produced}"),
            ));
        }

        info!(
            transformers = preprocessor.transformers.len(),
            features = produced,
            "model artifacts loaded"
        );

        Ok(LoadedModels {
            preprocessor: Arc::new(preprocessor),
            predictor: Arc::new(predictor),
        })
    }
}
