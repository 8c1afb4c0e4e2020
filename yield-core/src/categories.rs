//! Recovers the region and crop lists that populate the selection widgets.
//!
//! Resolution order:
//! 1. category metadata stored with the preprocessor,
//! 2. the first one-hot encoder exposing at least two learned lists
//!    (first list = regions, second = crops),
//! 3. the single-element [`CategoryEnumeration::fallback`] pair, with a
//!    warning attached.

use tracing::warn;

use crate::models::CategoryEnumeration;
use crate::pipeline::{CategoryExtractionError, FittedTransformer, Preprocessor};

/// Where a [`CategoryResolution`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    Metadata,
    Encoder,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryResolution {
    pub categories: CategoryEnumeration,
    pub source: CategorySource,
    /// Set when the fallback pair is in use.
    pub warning: Option<CategoryExtractionError>,
}

impl CategoryResolution {
    /// User-facing warning text for the fallback case.
    pub fn warning_message(&self) -> Option<String> {
        self.warning.as_ref().map(|e| {
            format!("Could not extract categories from preprocessor. Using defaults. ({e})")
        })
    }
}

pub struct CategoryResolver;

impl CategoryResolver {
    pub fn resolve(preprocessor: &dyn Preprocessor) -> CategoryResolution {
        if let Some(categories) = preprocessor.category_metadata() {
            if categories.is_usable() {
                return CategoryResolution {
                    categories,
                    source: CategorySource::Metadata,
                    warning: None,
                };
            }
            warn!("stored category metadata is empty; inspecting encoders instead");
        }

        match Self::from_encoders(preprocessor) {
            Ok(categories) => CategoryResolution {
                categories,
                source: CategorySource::Encoder,
                warning: None,
            },
            Err(error) => {
                warn!(%error, "falling back to default categories");
                CategoryResolution {
                    categories: CategoryEnumeration::fallback(),
                    source: CategorySource::Fallback,
                    warning: Some(error),
                }
            }
        }
    }

    /// Scans the fitted transformers for the first usable one-hot encoder.
    pub fn from_encoders(
        preprocessor: &dyn Preprocessor,
    ) -> Result<CategoryEnumeration, CategoryExtractionError> {
        let entries = preprocessor.fitted_transformers()?;

        let lists = entries
            .iter()
            .find_map(|entry| match &entry.transformer {
                FittedTransformer::OneHotEncoder { categories, .. } if categories.len() >= 2 => {
                    Some(categories)
                }
                _ => None,
            })
            .ok_or(CategoryExtractionError::NoCategoricalEncoder)?;

        let categories = CategoryEnumeration::new(lists[0].clone(), lists[1].clone());
        if !categories.is_usable() {
            return Err(CategoryExtractionError::Malformed(
                "encoder has an empty category list".to_string(),
            ));
        }
        Ok(categories)
    }
}
