pub mod artifacts;
pub mod categories;
pub mod models;
pub mod navigation;
pub mod pipeline;
pub mod session;
pub mod views;
pub mod widgets;

pub use artifacts::{ArtifactConfig, ArtifactLoadError, ArtifactLoader, ArtifactStore, LoadedModels};
pub use categories::{CategoryResolution, CategoryResolver, CategorySource};
pub use models::*;
pub use navigation::{NavAction, select_view};
pub use pipeline::{
    CategoryExtractionError, FeatureVector, PredictionError, Predictor, Preprocessor,
    TransformError,
};
pub use session::SessionState;
