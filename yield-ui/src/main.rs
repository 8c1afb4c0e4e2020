use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gpui::Application;
use tracing::{debug, error};

use yield_ui::config::{AppConfig, ConfigOverrides, ThemePreference};
use yield_ui::app::{self, StartupStatus};
use yield_ui::{gui, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop dashboard that predicts crop yield from climate and farming
/// inputs and charts the historical yield for the chosen region and crop.
///
/// Every flag overrides the matching key of the configuration file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file. Defaults to `crop-yield.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fitted preprocessor artifact.
    #[arg(long)]
    preprocessor: Option<PathBuf>,

    /// Fitted regression model artifact.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Historical yield CSV.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Artifact encoding.
    #[arg(long)]
    format: Option<String>,

    /// Log level or `EnvFilter` directive. `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Use the dark theme.
    #[arg(long)]
    dark: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            format: self.format.clone(),
            preprocessor: self.preprocessor.clone(),
            model: self.model.clone(),
            history: self.history.clone(),
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            theme: self.dark.then_some(ThemePreference::Dark),
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli.overrides());
    logging::init_logging(&config.logging)?;
    debug!(?config, "configuration resolved");

    // Artifacts load once, before the UI event loop takes over the thread.
    let runtime = tokio::runtime::Runtime::new().context("failed to start the tokio runtime")?;
    let store = runtime.block_on(app::load_artifact_store(&config))?;
    drop(runtime);

    let window = config.window;
    let status = StartupStatus::default();
    let recorder = status.clone();
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            gui::setup_app(cx, &window);
            if let Err(error) = gui::open_main_window(cx, store, &window) {
                error!(?error, "cannot start the dashboard");
                recorder.fail(error);
                // terminating the macOS app loop ends the process with status 0
                #[cfg(target_os = "macos")]
                std::process::exit(1);
                #[cfg(not(target_os = "macos"))]
                cx.quit();
            }
        });

    status.finish()
}
