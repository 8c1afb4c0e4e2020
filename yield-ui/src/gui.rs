use std::sync::Arc;

use anyhow::{Context as _, Result};
use gpui::{
    App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::info;
use yield_core::ArtifactStore;

use crate::config::{ThemePreference, WindowSection};
use crate::dashboard::Dashboard;
use crate::{Quit, quit};

pub const WINDOW_TITLE: &str = "Crop Yield Predictor";

pub fn setup_app(cx: &mut App, window: &WindowSection) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(cx);

    let mode = match window.theme {
        ThemePreference::Light => ThemeMode::Light,
        ThemePreference::Dark => ThemeMode::Dark,
    };
    Theme::change(mode, None, cx);

    cx.activate(true);

    #[cfg(target_os = "macos")]
    cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    cx.on_action(quit);

    cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the dashboard window, centered on the primary display.
pub fn open_main_window(
    cx: &mut App,
    store: Arc<ArtifactStore>,
    preferences: &WindowSection,
) -> Result<()> {
    let bounds = Bounds::centered(
        None,
        size(px(preferences.width), px(preferences.height)),
        cx,
    );
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        let dashboard = cx.new(|cx| Dashboard::new(store, cx));
        cx.new(|cx| Root::new(dashboard, window, cx))
    })
    .context("failed to open the dashboard window")?;

    info!(
        width = preferences.width,
        height = preferences.height,
        "dashboard window opened"
    );
    Ok(())
}
