pub mod factory;
pub mod store;

pub use factory::{ArtifactConfig, ArtifactLoadError, ArtifactLoader, ArtifactLoaderRegistry, LoadedModels};
pub use store::ArtifactStore;
