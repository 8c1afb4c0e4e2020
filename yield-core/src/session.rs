//! Per-session dashboard state.
//!
//! One [`SessionState`] exists per open dashboard window. It is passed by
//! reference into every view and is never shared between sessions.

use tracing::debug;

use crate::models::{InputRecord, PredictionResult, Submission, ViewSelector};

/// Current view plus the last successful submission, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    view: ViewSelector,
    submission: Option<Submission>,
}

impl SessionState {
    /// Fresh session on the home view with nothing submitted.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewSelector {
        self.view
    }

    pub fn set_view(&mut self, view: ViewSelector) {
        if self.view != view {
            debug!(from = %self.view, to = %view, "view changed");
        }
        self.view = view;
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn input_record(&self) -> Option<&InputRecord> {
        self.submission.as_ref().map(|s| &s.input)
    }

    pub fn prediction(&self) -> Option<PredictionResult> {
        self.submission.as_ref().map(|s| s.result)
    }

    /// Replaces the stored input and prediction together.
    pub fn set_submission(&mut self, input: InputRecord, result: PredictionResult) {
        self.submission = Some(Submission { input, result });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(year: i32) -> InputRecord {
        InputRecord {
            year,
            rainfall: 1485.0,
            pesticides: 121.0,
            temperature: 16.37,
            region: "India".to_string(),
            crop: "Rice".to_string(),
        }
    }

    #[test]
    fn fresh_session_is_home_with_nothing_submitted() {
        let session = SessionState::new();

        assert_eq!(session.view(), ViewSelector::Home);
        assert!(session.input_record().is_none());
        assert!(session.prediction().is_none());
    }

    #[test]
    fn set_submission_stores_both_halves() {
        let mut session = SessionState::new();
        session.set_submission(record(2020), PredictionResult::new(42.0));

        assert_eq!(session.input_record(), Some(&record(2020)));
        assert_eq!(session.prediction(), Some(PredictionResult::new(42.0)));
    }

    #[test]
    fn set_submission_overwrites_previous() {
        let mut session = SessionState::new();
        session.set_submission(record(2020), PredictionResult::new(1.0));
        session.set_submission(record(1995), PredictionResult::new(2.0));

        let s = session.submission().unwrap();
        assert_eq!(s.input.year, 1995);
        assert_eq!(s.result.value, 2.0);
    }

    #[test]
    fn set_view_leaves_submission_alone() {
        let mut session = SessionState::new();
        session.set_submission(record(2020), PredictionResult::new(1.0));
        session.set_view(ViewSelector::Trend);

        assert_eq!(session.view(), ViewSelector::Trend);
        assert!(session.submission().is_some());
    }
}
