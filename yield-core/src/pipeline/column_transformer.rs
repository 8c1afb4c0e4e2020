use serde::{Deserialize, Serialize};

use super::{CategoryExtractionError, FeatureVector, Preprocessor, TransformError};
use crate::models::{CategoryEnumeration, ColumnValue, InputColumn, InputRecord};

/// What a one-hot encoder does with a value it was not fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    #[default]
    Error,
    /// Encode the unknown value as all zeros.
    Ignore,
}

/// A single fitted transform and its learned parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FittedTransformer {
    OneHotEncoder {
        /// One learned list per input column.
        categories: Vec<Vec<String>>,
        #[serde(default)]
        handle_unknown: HandleUnknown,
    },
    StandardScaler {
        mean: Vec<f64>,
        scale: Vec<f64>,
    },
    Passthrough,
    Drop,
}

impl FittedTransformer {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::OneHotEncoder { .. } => "one_hot_encoder",
            Self::StandardScaler { .. } => "standard_scaler",
            Self::Passthrough => "passthrough",
            Self::Drop => "drop",
        }
    }

    /// Number of learned parameter sets, for transforms that have them.
    fn fitted_width(&self) -> Option<usize> {
        match self {
            Self::OneHotEncoder { categories, .. } => Some(categories.len()),
            Self::StandardScaler { mean, .. } => Some(mean.len()),
            Self::Passthrough | Self::Drop => None,
        }
    }
}

/// `(name, transformer, columns)` triple of a [`ColumnTransformer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerEntry {
    pub name: String,
    pub transformer: FittedTransformer,
    pub columns: Vec<InputColumn>,
}

/// Applies an ordered list of fitted transforms to column subsets and
/// concatenates their outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnTransformer {
    pub transformers: Vec<TransformerEntry>,
    /// Region/crop lists stored alongside the fitted transforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryEnumeration>,
}

impl ColumnTransformer {
    pub fn new(transformers: Vec<TransformerEntry>) -> Self {
        Self {
            transformers,
            categories: None,
        }
    }

    pub fn with_categories(mut self, categories: CategoryEnumeration) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Checks that every entry's learned parameters match its column list.
    pub fn validate(&self) -> Result<(), TransformError> {
        for entry in &self.transformers {
            if let FittedTransformer::StandardScaler { mean, scale } = &entry.transformer
                && mean.len() != scale.len()
            {
                return Err(TransformError::ShapeMismatch {
                    name: entry.name.clone(),
                    expected: mean.len(),
                    actual: scale.len(),
                });
            }
            if let Some(width) = entry.transformer.fitted_width()
                && width != entry.columns.len()
            {
                return Err(TransformError::ShapeMismatch {
                    name: entry.name.clone(),
                    expected: entry.columns.len(),
                    actual: width,
                });
            }
        }
        Ok(())
    }

    /// Total number of output features.
    pub fn n_features_out(&self) -> usize {
        self.transformers
            .iter()
            .map(|entry| match &entry.transformer {
                FittedTransformer::OneHotEncoder { categories, .. } => {
                    categories.iter().map(Vec::len).sum()
                }
                FittedTransformer::StandardScaler { .. } | FittedTransformer::Passthrough => {
                    entry.columns.len()
                }
                FittedTransformer::Drop => 0,
            })
            .sum()
    }
}

fn numeric(
    input: &InputRecord,
    column: InputColumn,
    transformer: &'static str,
) -> Result<f64, TransformError> {
    match input.value(column) {
        ColumnValue::Number(v) if v.is_finite() => Ok(v),
        ColumnValue::Number(_) => Err(TransformError::NonFinite(column)),
        ColumnValue::Text(_) => Err(TransformError::TypeMismatch {
            column,
            transformer,
        }),
    }
}

impl Preprocessor for ColumnTransformer {
    fn transform(&self, input: &InputRecord) -> Result<FeatureVector, TransformError> {
        self.validate()?;

        let mut features = Vec::with_capacity(self.n_features_out());
        for entry in &self.transformers {
            let kind = entry.transformer.kind_name();
            match &entry.transformer {
                FittedTransformer::OneHotEncoder {
                    categories,
                    handle_unknown,
                } => {
                    for (column, learned) in entry.columns.iter().zip(categories) {
                        let ColumnValue::Text(value) = input.value(*column) else {
                            return Err(TransformError::TypeMismatch {
                                column: *column,
                                transformer: kind,
                            });
                        };
                        let hit = learned.iter().position(|c| c == value);
                        if hit.is_none() && *handle_unknown == HandleUnknown::Error {
                            return Err(TransformError::UnknownCategory {
                                column: *column,
                                value: value.to_string(),
                            });
                        }
                        features.extend((0..learned.len()).map(|i| {
                            if Some(i) == hit { 1.0 } else { 0.0 }
                        }));
                    }
                }
                FittedTransformer::StandardScaler { mean, scale } => {
                    for (i, column) in entry.columns.iter().enumerate() {
                        let x = numeric(input, *column, kind)?;
                        // zero-variance columns are fitted with scale 0; treat as 1
                        let s = if scale[i] == 0.0 { 1.0 } else { scale[i] };
                        features.push((x - mean[i]) / s);
                    }
                }
                FittedTransformer::Passthrough => {
                    for column in &entry.columns {
                        features.push(numeric(input, *column, kind)?);
                    }
                }
                FittedTransformer::Drop => {}
            }
        }

        Ok(FeatureVector::new(features))
    }

    fn fitted_transformers(&self) -> Result<&[TransformerEntry], CategoryExtractionError> {
        Ok(&self.transformers)
    }

    fn category_metadata(&self) -> Option<CategoryEnumeration> {
        self.categories.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn record(region: &str, crop: &str) -> InputRecord {
        InputRecord {
            year: 2000,
            rainfall: 1000.0,
            pesticides: 50.0,
            temperature: 20.0,
            region: region.to_string(),
            crop: crop.to_string(),
        }
    }

    fn transformer(handle_unknown: HandleUnknown) -> ColumnTransformer {
        ColumnTransformer::new(vec![
            TransformerEntry {
                name: "onehotencoder".to_string(),
                transformer: FittedTransformer::OneHotEncoder {
                    categories: vec![strings(&["Albania", "India"]), strings(&["Maize", "Rice", "Wheat"])],
                    handle_unknown,
                },
                columns: vec![InputColumn::Area, InputColumn::Item],
            },
            TransformerEntry {
                name: "standardscaler".to_string(),
                transformer: FittedTransformer::StandardScaler {
                    mean: vec![2000.0, 1000.0, 0.0, 10.0],
                    scale: vec![10.0, 500.0, 0.0, 5.0],
                },
                columns: vec![
                    InputColumn::Year,
                    InputColumn::Rainfall,
                    InputColumn::Pesticides,
                    InputColumn::Temperature,
                ],
            },
        ])
    }

    #[test]
    fn transform_concatenates_encoded_and_scaled_features() {
        let features = transformer(HandleUnknown::Error)
            .transform(&record("India", "Rice"))
            .unwrap();

        assert_eq!(
            features.into_inner(),
            vec![0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 50.0, 2.0]
        );
    }

    #[test]
    fn n_features_out_matches_transform_width() {
        let ct = transformer(HandleUnknown::Error);
        let features = ct.transform(&record("Albania", "Wheat")).unwrap();

        assert_eq!(ct.n_features_out(), 9);
        assert_eq!(features.len(), 9);
    }

    #[test]
    fn unknown_category_is_an_error_by_default() {
        let err = transformer(HandleUnknown::Error)
            .transform(&record("Mars", "Rice"))
            .unwrap_err();

        assert_eq!(
            err,
            TransformError::UnknownCategory {
                column: InputColumn::Area,
                value: "Mars".to_string(),
            }
        );
    }

    #[test]
    fn unknown_category_encodes_as_zeros_when_ignored() {
        let features = transformer(HandleUnknown::Ignore)
            .transform(&record("Mars", "Rice"))
            .unwrap();

        assert_eq!(&features[..5], &[0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn passthrough_and_drop() {
        let ct = ColumnTransformer::new(vec![
            TransformerEntry {
                name: "keep".to_string(),
                transformer: FittedTransformer::Passthrough,
                columns: vec![InputColumn::Year, InputColumn::Temperature],
            },
            TransformerEntry {
                name: "remainder".to_string(),
                transformer: FittedTransformer::Drop,
                columns: vec![InputColumn::Rainfall],
            },
        ]);

        let features = ct.transform(&record("India", "Rice")).unwrap();
        assert_eq!(features.into_inner(), vec![2000.0, 20.0]);
    }

    #[test]
    fn scaler_rejects_text_columns() {
        let ct = ColumnTransformer::new(vec![TransformerEntry {
            name: "scaler".to_string(),
            transformer: FittedTransformer::StandardScaler {
                mean: vec![0.0],
                scale: vec![1.0],
            },
            columns: vec![InputColumn::Area],
        }]);

        assert_eq!(
            ct.transform(&record("India", "Rice")),
            Err(TransformError::TypeMismatch {
                column: InputColumn::Area,
                transformer: "standard_scaler",
            })
        );
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut input = record("India", "Rice");
        input.rainfall = f64::NAN;

        assert_eq!(
            transformer(HandleUnknown::Error).transform(&input),
            Err(TransformError::NonFinite(InputColumn::Rainfall))
        );
    }

    #[test]
    fn validate_catches_category_list_mismatch() {
        let ct = ColumnTransformer::new(vec![TransformerEntry {
            name: "ohe".to_string(),
            transformer: FittedTransformer::OneHotEncoder {
                categories: vec![strings(&["India"])],
                handle_unknown: HandleUnknown::Error,
            },
            columns: vec![InputColumn::Area, InputColumn::Item],
        }]);

        assert_eq!(
            ct.validate(),
            Err(TransformError::ShapeMismatch {
                name: "ohe".to_string(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn deserializes_from_tagged_json() {
        let json = r#"{
            "transformers": [
                {
                    "name": "ohe",
                    "transformer": { "kind": "one_hot_encoder", "categories": [["India"], ["Rice"]] },
                    "columns": ["Area", "Item"]
                },
                { "name": "rest", "transformer": { "kind": "passthrough" }, "columns": ["Year"] }
            ]
        }"#;

        let ct: ColumnTransformer = serde_json::from_str(json).unwrap();

        assert_eq!(ct.transformers.len(), 2);
        assert_eq!(ct.categories, None);
        assert!(matches!(
            ct.transformers[0].transformer,
            FittedTransformer::OneHotEncoder {
                handle_unknown: HandleUnknown::Error,
                ..
            }
        ));
        assert_eq!(ct.n_features_out(), 3);
    }
}
