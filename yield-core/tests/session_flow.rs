//! End-to-end walk through one dashboard session: navigate, submit, then
//! read the summary and trend views back out of the same session.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use yield_core::pipeline::{
    ColumnTransformer, FittedRegressor, FittedTransformer, HandleUnknown, TransformerEntry,
};
use yield_core::views::{PredictionView, SubmissionError, SummaryPanel, TrendPanel};
use yield_core::{
    ArtifactStore, CategoryResolver, HistoricalRecord, HistoricalTable, InputColumn, InputRecord,
    LoadedModels, NavAction, SessionState, TransformError, ViewSelector, select_view,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn history_row(year: i32, region: &str, crop: &str, actual_yield: f64) -> HistoricalRecord {
    HistoricalRecord {
        year,
        region: region.to_string(),
        crop: crop.to_string(),
        actual_yield,
    }
}

fn store() -> ArtifactStore {
    let preprocessor = ColumnTransformer::new(vec![
        TransformerEntry {
            name: "onehotencoder".to_string(),
            transformer: FittedTransformer::OneHotEncoder {
                categories: vec![strings(&["India", "Kenya"]), strings(&["Maize", "Rice"])],
                handle_unknown: HandleUnknown::Error,
            },
            columns: vec![InputColumn::Area, InputColumn::Item],
        },
        TransformerEntry {
            name: "standardscaler".to_string(),
            transformer: FittedTransformer::StandardScaler {
                mean: vec![2000.0, 1000.0, 100.0, 20.0],
                scale: vec![10.0, 100.0, 10.0, 1.0],
            },
            columns: vec![
                InputColumn::Year,
                InputColumn::Rainfall,
                InputColumn::Pesticides,
                InputColumn::Temperature,
            ],
        },
    ]);
    let predictor = FittedRegressor::Linear {
        coefficients: vec![0.0, 0.0, 0.0, 0.0, 100.0, 10.0, 0.0, 0.0],
        intercept: 30000.0,
    };
    let history: HistoricalTable = vec![
        history_row(2020, "India", "Rice", 32000.0),
        history_row(2018, "India", "Rice", 30000.0),
        history_row(2019, "India", "Rice", 31000.0),
        history_row(2019, "Kenya", "Maize", 15000.0),
    ]
    .into_iter()
    .collect();

    ArtifactStore::new(
        LoadedModels {
            preprocessor: Arc::new(preprocessor),
            predictor: Arc::new(predictor),
        },
        history,
    )
}

fn scenario_input(region: &str) -> InputRecord {
    InputRecord {
        year: 2020,
        rainfall: 1200.0,
        pesticides: 100.0,
        temperature: 20.0,
        region: region.to_string(),
        crop: "Rice".to_string(),
    }
}

#[test]
fn fresh_session_has_empty_summary_and_trend() {
    let store = store();
    let session = SessionState::new();

    assert_eq!(session.view(), ViewSelector::Home);
    assert!(matches!(SummaryPanel::render(&session), SummaryPanel::Empty { .. }));
    assert_eq!(
        TrendPanel::render(&session, store.history()),
        TrendPanel::NoPrediction
    );
}

#[test]
fn categories_come_from_the_loaded_preprocessor() {
    let resolution = CategoryResolver::resolve(store().preprocessor());

    assert_eq!(resolution.categories.regions, strings(&["India", "Kenya"]));
    assert_eq!(resolution.categories.crops, strings(&["Maize", "Rice"]));
}

#[test]
fn submit_then_review_summary_and_trend() {
    let store = store();
    let mut session = SessionState::new();

    select_view(&mut session, NavAction::Predict);
    let outcome = PredictionView::submit(&mut session, &store, scenario_input("India")).unwrap();
    // year (2020-2000)/10 = 2 -> 200, rainfall (1200-1000)/100 = 2 -> 20
    assert_eq!(outcome.result.value, 30220.0);

    select_view(&mut session, NavAction::Summary);
    assert_eq!(session.view(), ViewSelector::Summary);
    let SummaryPanel::Table { rows } = SummaryPanel::render(&session) else {
        panic!("expected the summary table");
    };
    let values: Vec<String> = rows.iter().map(|r| r.value.to_string()).collect();
    assert_eq!(values, vec!["2020", "1200.0", "100.0", "20.0", "India", "Rice"]);

    select_view(&mut session, NavAction::Trend);
    let TrendPanel::Chart(chart) = TrendPanel::render(&session, store.history()) else {
        panic!("expected a trend chart");
    };
    let points: Vec<(i32, f64)> = chart
        .points
        .iter()
        .map(|p| (p.year, p.actual_yield))
        .collect();
    assert_eq!(
        points,
        vec![(2018, 30000.0), (2019, 31000.0), (2020, 32000.0)]
    );
}

#[test]
fn unseen_region_is_a_transform_error_and_leaves_views_usable() {
    let store = store();
    let mut session = SessionState::new();
    select_view(&mut session, NavAction::Predict);

    let err = PredictionView::submit(&mut session, &store, scenario_input("Mars")).unwrap_err();

    assert_eq!(
        err,
        SubmissionError::Transform(TransformError::UnknownCategory {
            column: InputColumn::Area,
            value: "Mars".to_string(),
        })
    );
    assert!(session.submission().is_none());

    select_view(&mut session, NavAction::Summary);
    assert!(matches!(SummaryPanel::render(&session), SummaryPanel::Empty { .. }));
}
