//! Prediction view: form values in, yield estimate out.
//!
//! A submission runs the record through the preprocessor and the predictor
//! and only then writes the record and result into the session. If either
//! step fails the session is left exactly as it was and the error is
//! returned for display inside the view.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::artifacts::ArtifactStore;
use crate::models::{CategoryEnumeration, InputRecord, PredictionResult};
use crate::pipeline::{PredictionError, TransformError};
use crate::session::SessionState;
use crate::widgets::{self, FieldError};

/// Why a submission produced no prediction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmissionError {
    #[error("{}", join_field_errors(.0))]
    InvalidInput(Vec<FieldError>),

    #[error("Could not prepare the inputs for the model: {0}")]
    Transform(#[from] TransformError),

    #[error("The model could not make a prediction: {0}")]
    Prediction(#[from] PredictionError),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw widget contents of the prediction form.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionForm {
    pub year: String,
    pub rainfall: String,
    pub pesticides: String,
    pub temperature: String,
    pub region: Option<String>,
    pub crop: Option<String>,
}

impl PredictionForm {
    /// Widget defaults with the first region and crop preselected.
    pub fn with_defaults(categories: &CategoryEnumeration) -> Self {
        Self {
            year: widgets::YEAR.default_text(),
            rainfall: widgets::RAINFALL.default_text(),
            pesticides: widgets::PESTICIDES.default_text(),
            temperature: widgets::TEMPERATURE.default_text(),
            region: categories.regions.first().cloned(),
            crop: categories.crops.first().cloned(),
        }
    }

    /// Parses every field, collecting all problems rather than stopping at
    /// the first.
    pub fn to_input_record(&self) -> Result<InputRecord, Vec<FieldError>> {
        let mut errors = Vec::new();

        let year = widgets::YEAR
            .parse_whole(&self.year)
            .map_err(|e| errors.push(e))
            .ok();
        let rainfall = widgets::RAINFALL
            .parse(&self.rainfall)
            .map_err(|e| errors.push(e))
            .ok();
        let pesticides = widgets::PESTICIDES
            .parse(&self.pesticides)
            .map_err(|e| errors.push(e))
            .ok();
        let temperature = widgets::TEMPERATURE
            .parse(&self.temperature)
            .map_err(|e| errors.push(e))
            .ok();
        let region = selected(&self.region, widgets::AREA_LABEL, &mut errors);
        let crop = selected(&self.crop, widgets::CROP_LABEL, &mut errors);

        match (year, rainfall, pesticides, temperature, region, crop) {
            (Some(year), Some(rainfall), Some(pesticides), Some(temperature), Some(region), Some(crop))
                if errors.is_empty() =>
            {
                Ok(InputRecord {
                    year,
                    rainfall,
                    pesticides,
                    temperature,
                    region,
                    crop,
                })
            }
            _ => Err(errors),
        }
    }
}

fn selected(
    value: &Option<String>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            errors.push(FieldError::NothingSelected { field });
            None
        }
    }
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub input: InputRecord,
    pub result: PredictionResult,
}

impl PredictionOutcome {
    /// Success banner text, value rounded to two decimals.
    pub fn message(&self) -> String {
        format!("🌱 Predicted Crop Yield: {} tonnes/hectare", self.result)
    }
}

impl fmt::Display for PredictionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.result)
    }
}

pub struct PredictionView;

impl PredictionView {
    /// Transforms and predicts `input`, then stores both in `session`.
    ///
    /// # Errors
    /// * [`SubmissionError::Transform`] when the preprocessor rejects the record.
    /// * [`SubmissionError::Prediction`] when the predictor fails.
    ///
    /// In both cases `session` is unchanged.
    pub fn submit(
        session: &mut SessionState,
        store: &ArtifactStore,
        input: InputRecord,
    ) -> Result<PredictionOutcome, SubmissionError> {
        let features = store.preprocessor().transform(&input).inspect_err(|error| {
            warn!(%error, %input, "transform failed");
        })?;
        let value = store.predictor().predict(&features).inspect_err(|error| {
            warn!(%error, %input, "prediction failed");
        })?;

        let result = PredictionResult::new(value);
        session.set_submission(input.clone(), result);

        let outcome = PredictionOutcome { input, result };
        info!(%outcome, "prediction stored");
        Ok(outcome)
    }

    /// Parses `form` and submits the resulting record.
    pub fn submit_form(
        session: &mut SessionState,
        store: &ArtifactStore,
        form: &PredictionForm,
    ) -> Result<PredictionOutcome, SubmissionError> {
        let input = form.to_input_record().map_err(SubmissionError::InvalidInput)?;
        Self::submit(session, store, input)
    }
}
