use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::InputRecord;

/// Scalar yield estimate returned by the predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub value: f64,
}

impl PredictionResult {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// The estimate rounded to two decimal places.
    ///
    /// Rounds the exact binary value of the float, so `2.675` (stored as
    /// `2.67499…`) goes down, and exact ties go to the even digit.
    ///
    /// Returns `None` when the value is not finite.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use yield_core::PredictionResult;
    ///
    /// assert_eq!(PredictionResult::new(36613.125).rounded(), Some(dec!(36613.12)));
    /// assert_eq!(PredictionResult::new(f64::NAN).rounded(), None);
    /// ```
    pub fn rounded(&self) -> Option<Decimal> {
        Decimal::from_f64_retain(self.value)
            .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounded() {
            Some(d) => write!(f, "{d:.2}"),
            None => write!(f, "{:.2}", self.value),
        }
    }
}

/// The input record and prediction written together by one submission.
///
/// Keeping both in one value means a session can never hold one without
/// the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub input: InputRecord,
    pub result: PredictionResult,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounded_to_nearest_hundredth() {
        assert_eq!(PredictionResult::new(123.454).rounded(), Some(dec!(123.45)));
        assert_eq!(PredictionResult::new(123.456).rounded(), Some(dec!(123.46)));
        assert_eq!(PredictionResult::new(-2.346).rounded(), Some(dec!(-2.35)));
    }

    #[test]
    fn rounding_uses_the_stored_binary_value() {
        // exact ties go to the even digit
        assert_eq!(PredictionResult::new(36613.125).rounded(), Some(dec!(36613.12)));
        assert_eq!(PredictionResult::new(0.125).rounded(), Some(dec!(0.12)));
        // 2.675 and 1.005 are stored slightly below the written value
        assert_eq!(PredictionResult::new(2.675).rounded(), Some(dec!(2.67)));
        assert_eq!(PredictionResult::new(1.005).rounded(), Some(dec!(1.00)));
    }

    #[test]
    fn display_matches_rounded_value() {
        let shown: Vec<String> = [36613.125, 2.675, 0.125, 1.005]
            .into_iter()
            .map(|v| PredictionResult::new(v).to_string())
            .collect();
        assert_eq!(shown, vec!["36613.12", "2.67", "0.12", "1.00"]);
    }

    #[test]
    fn display_always_shows_two_places() {
        assert_eq!(PredictionResult::new(36613.0).to_string(), "36613.00");
        assert_eq!(PredictionResult::new(0.1).to_string(), "0.10");
    }

    #[test]
    fn display_handles_non_finite_values() {
        assert_eq!(PredictionResult::new(f64::INFINITY).to_string(), "inf");
    }
}
