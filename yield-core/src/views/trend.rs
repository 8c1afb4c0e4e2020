use crate::models::HistoricalTable;
use crate::session::SessionState;

pub const NO_PREDICTION_MESSAGE: &str = "⚠️ Please make a prediction first.";
pub const NO_HISTORY_MESSAGE: &str = "⚠️ No historical data available for this Area and Crop.";

/// Green, as `0xRRGGBB`.
pub const TREND_LINE_COLOR: u32 = 0x008000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    /// Observed yield in hg/ha.
    pub actual_yield: f64,
}

/// Line chart of historical yield for one region/crop pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Sorted by year; rows sharing a year keep their source order.
    pub points: Vec<TrendPoint>,
    pub markers: bool,
    /// Stroke of the series, as `0xRRGGBB`.
    pub line_color: u32,
}

/// What the trend view shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendPanel {
    NoPrediction,
    NoHistory { region: String, crop: String },
    Chart(TrendChart),
}

impl TrendPanel {
    pub fn render(session: &SessionState, history: &HistoricalTable) -> Self {
        let (Some(input), Some(_)) = (session.input_record(), session.prediction()) else {
            return Self::NoPrediction;
        };

        let mut points: Vec<TrendPoint> = history
            .matching(&input.region, &input.crop)
            .map(|r| TrendPoint {
                year: r.year,
                actual_yield: r.actual_yield,
            })
            .collect();

        if points.is_empty() {
            return Self::NoHistory {
                region: input.region.clone(),
                crop: input.crop.clone(),
            };
        }

        // stable: duplicate years stay in file order
        points.sort_by_key(|p| p.year);

        Self::Chart(TrendChart {
            title: format!("Yield Trend for {} in {}", input.crop, input.region),
            x_label: "Year",
            y_label: "Actual Yield (hg/ha)",
            points,
            markers: true,
            line_color: TREND_LINE_COLOR,
        })
    }

    /// Warning text for the empty states.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Self::NoPrediction => Some(NO_PREDICTION_MESSAGE),
            Self::NoHistory { .. } => Some(NO_HISTORY_MESSAGE),
            Self::Chart(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{HistoricalRecord, InputRecord, PredictionResult};

    fn row(year: i32, region: &str, crop: &str, actual_yield: f64) -> HistoricalRecord {
        HistoricalRecord {
            year,
            region: region.to_string(),
            crop: crop.to_string(),
            actual_yield,
        }
    }

    fn session_for(region: &str, crop: &str) -> SessionState {
        let mut session = SessionState::new();
        session.set_submission(
            InputRecord {
                year: 2020,
                rainfall: 1200.0,
                pesticides: 100.0,
                temperature: 20.0,
                region: region.to_string(),
                crop: crop.to_string(),
            },
            PredictionResult::new(31000.0),
        );
        session
    }

    fn history() -> HistoricalTable {
        vec![
            row(2020, "India", "Rice", 32000.0),
            row(2018, "India", "Rice", 30000.0),
            row(2019, "Kenya", "Rice", 9999.0),
            row(2019, "India", "Rice", 31000.0),
            row(2019, "India", "Maize", 1.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn no_submission_means_no_prediction_warning() {
        let panel = TrendPanel::render(&SessionState::new(), &history());

        assert_eq!(panel, TrendPanel::NoPrediction);
        assert_eq!(panel.warning(), Some(NO_PREDICTION_MESSAGE));
    }

    #[test]
    fn no_matching_rows_means_no_history_warning() {
        let panel = TrendPanel::render(&session_for("India", "Wheat"), &history());

        assert_eq!(
            panel,
            TrendPanel::NoHistory {
                region: "India".to_string(),
                crop: "Wheat".to_string(),
            }
        );
        assert_eq!(panel.warning(), Some(NO_HISTORY_MESSAGE));
    }

    #[test]
    fn matching_rows_plot_in_year_order() {
        let TrendPanel::Chart(chart) = TrendPanel::render(&session_for("India", "Rice"), &history())
        else {
            panic!("expected a chart");
        };

        let years: Vec<i32> = chart.points.iter().map(|p| p.year).collect();
        let yields: Vec<f64> = chart.points.iter().map(|p| p.actual_yield).collect();

        assert_eq!(years, vec![2018, 2019, 2020]);
        assert_eq!(yields, vec![30000.0, 31000.0, 32000.0]);
        assert_eq!(chart.title, "Yield Trend for Rice in India");
        assert_eq!(chart.x_label, "Year");
        assert_eq!(chart.y_label, "Actual Yield (hg/ha)");
        assert!(chart.markers);
        assert_eq!(chart.line_color, 0x008000);
    }

    #[test]
    fn duplicate_years_are_all_plotted() {
        let history: HistoricalTable = vec![
            row(2001, "Chad", "Sorghum", 3.0),
            row(2000, "Chad", "Sorghum", 1.0),
            row(2000, "Chad", "Sorghum", 2.0),
        ]
        .into_iter()
        .collect();

        let TrendPanel::Chart(chart) = TrendPanel::render(&session_for("Chad", "Sorghum"), &history)
        else {
            panic!("expected a chart");
        };

        let points: Vec<(i32, f64)> = chart
            .points
            .iter()
            .map(|p| (p.year, p.actual_yield))
            .collect();
        assert_eq!(points, vec![(2000, 1.0), (2000, 2.0), (2001, 3.0)]);
    }

    #[test]
    fn region_match_is_case_sensitive() {
        let panel = TrendPanel::render(&session_for("india", "Rice"), &history());
        assert!(matches!(panel, TrendPanel::NoHistory { .. }));
    }
}
