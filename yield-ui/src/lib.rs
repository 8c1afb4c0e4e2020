pub mod app;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod gui;
pub mod logging;

use gpui::{App, actions};
pub use gui::setup_app;
use tracing::info;

actions!(crop_yield, [Quit]);

pub fn quit(_: &Quit, cx: &mut App) {
    info!("quitting");
    cx.quit();
}
