//! Fitted preprocessing and regression behind narrow traits.
//!
//! The dashboard only ever sees a [`Preprocessor`] and a [`Predictor`].
//! [`ColumnTransformer`] and [`FittedRegressor`] are the concrete fitted
//! artifacts shipped with this crate; tests and other backends can supply
//! their own implementations.

mod column_transformer;
mod regressor;

use std::ops::Deref;

use thiserror::Error;

pub use column_transformer::{ColumnTransformer, FittedTransformer, HandleUnknown, TransformerEntry};
pub use regressor::{FittedRegressor, TreeNode};

use crate::models::{CategoryEnumeration, InputColumn, InputRecord};

/// Numeric features produced by a [`Preprocessor`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for FeatureVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// Errors raised while turning an [`InputRecord`] into features.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransformError {
    /// A categorical value was not seen when the encoder was fitted.
    #[error("unknown category '{value}' for column {column}")]
    UnknownCategory { column: InputColumn, value: String },

    /// A numeric transformer was given text or vice versa.
    #[error("column {column} cannot be handled by the {transformer} transformer")]
    TypeMismatch {
        column: InputColumn,
        transformer: &'static str,
    },

    /// Fitted parameters do not line up with the configured columns.
    #[error("transformer '{name}' expects {expected} columns, fitted for {actual}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// The record contains NaN or an infinite number.
    #[error("column {0} is not a finite number")]
    NonFinite(InputColumn),
}

/// Errors raised by a [`Predictor`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictionError {
    #[error("model expects {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("malformed model: {0}")]
    MalformedModel(String),

    #[error("model produced a non-finite prediction")]
    NonFiniteOutput,
}

/// Errors raised while recovering category lists from a preprocessor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryExtractionError {
    #[error("preprocessor does not expose its fitted transformers")]
    NotIntrospectable,

    #[error("no one-hot encoder with at least two category lists")]
    NoCategoricalEncoder,

    #[error("malformed category data: {0}")]
    Malformed(String),
}

/// Maps a structured input record to a numeric feature vector.
pub trait Preprocessor: Send + Sync {
    fn transform(&self, input: &InputRecord) -> Result<FeatureVector, TransformError>;

    /// The fitted `(name, transformer, columns)` entries, in fit order.
    fn fitted_transformers(&self) -> Result<&[TransformerEntry], CategoryExtractionError> {
        Err(CategoryExtractionError::NotIntrospectable)
    }

    /// Category lists persisted explicitly at training time, if any.
    fn category_metadata(&self) -> Option<CategoryEnumeration> {
        None
    }
}

/// Maps a feature vector to a scalar yield estimate.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}
