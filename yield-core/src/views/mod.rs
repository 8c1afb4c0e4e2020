//! View models for the four dashboard views.
//!
//! Each view turns the session (and, where needed, the artifact store) into
//! a plain value describing what to show. The UI crate only draws these.

pub mod home;
pub mod prediction;
pub mod summary;
pub mod trend;

pub use home::HomePanel;
pub use prediction::{PredictionForm, PredictionOutcome, PredictionView, SubmissionError};
pub use summary::{SummaryPanel, SummaryRow, SummaryValue};
pub use trend::{TrendChart, TrendPanel, TrendPoint};
