use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use yield_core::views::{PredictionForm, PredictionView, SummaryPanel, TrendPanel};
use yield_core::{ArtifactConfig, CategoryResolver, SessionState, widgets};

/// Check a set of dashboard artifacts without starting the UI.
///
/// Loads the preprocessor, model and history table, prints the categories
/// the prediction form would offer, and optionally runs one prediction
/// and prints the summary and trend the dashboard would show for it.
#[derive(Parser, Debug)]
#[command(name = "yield-inspect")]
#[command(version, about, long_about = None)]
struct Args {
    /// Fitted preprocessor artifact
    #[arg(long, default_value = "preprocessor.json")]
    preprocessor: PathBuf,

    /// Fitted regression model artifact
    #[arg(long, default_value = "model.json")]
    model: PathBuf,

    /// Historical yield CSV
    #[arg(long, default_value = "yield_df.csv")]
    history: PathBuf,

    /// Artifact encoding
    #[arg(long, default_value = "json")]
    format: String,

    /// Region to predict for; requires --crop
    #[arg(long, requires = "crop")]
    region: Option<String>,

    /// Crop to predict for; requires --region
    #[arg(long, requires = "region")]
    crop: Option<String>,

    #[arg(long, default_value_t = widgets::YEAR.default_text())]
    year: String,

    #[arg(long, default_value_t = widgets::RAINFALL.default_text())]
    rainfall: String,

    #[arg(long, default_value_t = widgets::PESTICIDES.default_text())]
    pesticides: String,

    #[arg(long, default_value_t = widgets::TEMPERATURE.default_text())]
    temperature: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ArtifactConfig {
        format: args.format.clone(),
        preprocessor_path: args.preprocessor.clone(),
        predictor_path: args.model.clone(),
        history_path: args.history.clone(),
    };

    let registry = yield_data::build_registry();
    let store = yield_data::load_store(&registry, &config)
        .await
        .context("Failed to load artifacts")?;

    println!("Loaded {} historical rows.", store.history().len());

    let resolution = CategoryResolver::resolve(store.preprocessor());
    if let Some(warning) = resolution.warning_message() {
        println!("warning: {warning}");
    }
    println!(
        "Regions ({}): {}",
        resolution.categories.regions.len(),
        resolution.categories.regions.join(", ")
    );
    println!(
        "Crops ({}): {}",
        resolution.categories.crops.len(),
        resolution.categories.crops.join(", ")
    );

    let (Some(region), Some(crop)) = (args.region, args.crop) else {
        return Ok(());
    };

    let form = PredictionForm {
        year: args.year,
        rainfall: args.rainfall,
        pesticides: args.pesticides,
        temperature: args.temperature,
        region: Some(region),
        crop: Some(crop),
    };

    let mut session = SessionState::new();
    let outcome = PredictionView::submit_form(&mut session, &store, &form)
        .context("Prediction failed")?;
    println!("{}", outcome.message());

    if let SummaryPanel::Table { rows } = SummaryPanel::render(&session) {
        for row in rows {
            println!("  {:<12} {}", row.field, row.value);
        }
    }

    match TrendPanel::render(&session, store.history()) {
        TrendPanel::Chart(chart) => {
            println!("{}", chart.title);
            for point in chart.points {
                println!("  {}  {}", point.year, point.actual_yield);
            }
        }
        other => {
            if let Some(warning) = other.warning() {
                println!("{warning}");
            }
        }
    }

    Ok(())
}
