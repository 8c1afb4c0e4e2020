//! The dashboard window: sidebar navigation plus one view panel.

use std::sync::Arc;

use gpui::{
    AnyElement, App, AppContext, Context, Div, Entity, FontWeight, IntoElement, ParentElement,
    Render, Styled, Subscription, Window, div, px,
};
use gpui_component::{ActiveTheme, h_flex, v_flex};
use tracing::{info, warn};
use yield_core::views::{HomePanel, PredictionForm, PredictionView, SummaryPanel, TrendPanel};
use yield_core::{
    ArtifactStore, CategoryResolution, CategoryResolver, NavAction, SessionState, ViewSelector,
    select_view,
};

use crate::components::panels::{self, NoticeKind, make_heading, make_notice};
use crate::components::{PredictionFormView, make_button, make_nav_button};
use crate::{Quit, quit};

/// Everything the dashboard shows that does not depend on gpui.
pub struct DashboardState {
    store: Arc<ArtifactStore>,
    session: SessionState,
    categories: CategoryResolution,
    notice: Option<(NoticeKind, String)>,
}

impl DashboardState {
    /// Resolves the selectable categories once for the whole session.
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        let categories = CategoryResolver::resolve(store.preprocessor());
        info!(
            source = ?categories.source,
            regions = categories.categories.regions.len(),
            crops = categories.categories.crops.len(),
            "categories resolved"
        );

        Self {
            store,
            session: SessionState::new(),
            categories,
            notice: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn categories(&self) -> &CategoryResolution {
        &self.categories
    }

    /// Outcome of the last submission, until the view changes.
    pub fn notice(&self) -> Option<(NoticeKind, &str)> {
        self.notice.as_ref().map(|(kind, text)| (*kind, text.as_str()))
    }

    pub fn navigate(&mut self, action: NavAction) {
        let before = self.session.view();
        select_view(&mut self.session, action);
        if self.session.view() != before {
            self.notice = None;
        }
    }

    /// Failures become an error notice; the session keeps its last good
    /// submission.
    pub fn submit(&mut self, form: &PredictionForm) {
        self.notice = Some(
            match PredictionView::submit_form(&mut self.session, &self.store, form) {
                Ok(outcome) => (NoticeKind::Success, outcome.message()),
                Err(error) => {
                    warn!(%error, "submission rejected");
                    (NoticeKind::Error, error.to_string())
                }
            },
        );
    }

    pub fn summary(&self) -> SummaryPanel {
        SummaryPanel::render(&self.session)
    }

    pub fn trend(&self) -> TrendPanel {
        TrendPanel::render(&self.session, self.store.history())
    }
}

pub struct Dashboard {
    state: DashboardState,
    form: Option<Entity<PredictionFormView>>,
    _window_close_subscription: Subscription,
}

impl Dashboard {
    pub fn new(store: Arc<ArtifactStore>, cx: &mut Context<Self>) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("window closed");
            quit(&Quit, cx);
        });

        Self {
            state: DashboardState::new(store),
            form: None,
            _window_close_subscription: subscription,
        }
    }

    /// Built on first visit so the widgets keep their contents across
    /// navigation.
    fn form(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Entity<PredictionFormView> {
        if let Some(form) = &self.form {
            return form.clone();
        }
        let categories = self.state.categories().categories.clone();
        let form = cx.new(|cx| PredictionFormView::new(&categories, window, cx));
        self.form = Some(form.clone());
        form
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let Some(form) = &self.form else {
            return;
        };
        let values = form.read(cx).to_form(cx);
        self.state.submit(&values);
        cx.notify();
    }

    fn render_sidebar(&self, cx: &mut Context<Self>) -> Div {
        let current = self.state.session().view();

        v_flex()
            .w(px(220.))
            .h_full()
            .p_4()
            .gap_2()
            .border_r_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .pb_2()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .child("🌾 Crop Yield Predictor"),
            )
            .children(NavAction::all().iter().map(|&action| {
                make_nav_button(
                    action,
                    action.target() == current,
                    cx.listener(move |this, _, _, cx| {
                        this.state.navigate(action);
                        cx.notify();
                    }),
                )
            }))
    }

    fn render_prediction(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let form = self.form(window, cx);

        let fallback_warning = self
            .state
            .categories()
            .warning_message()
            .map(|text| make_notice(NoticeKind::Warning, text, cx));
        let notice = self
            .state
            .notice()
            .map(|(kind, text)| make_notice(kind, text.to_string(), cx));

        v_flex()
            .gap_4()
            .child(make_heading("🔮 Enter Input Parameters"))
            .children(fallback_warning)
            .child(form)
            .child(h_flex().child(make_button(
                "predict",
                "🚀 Predict Crop Yield",
                cx.listener(|this, _, _, cx| this.submit(cx)),
            )))
            .children(notice)
            .into_any_element()
    }
}

impl Render for Dashboard {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let panel = match self.state.session().view() {
            ViewSelector::Home => panels::home_panel(&HomePanel::new()),
            ViewSelector::Predict => self.render_prediction(window, cx),
            ViewSelector::Summary => panels::summary_panel(&self.state.summary(), cx),
            ViewSelector::Trend => panels::trend_panel(&self.state.trend(), cx),
        };

        h_flex()
            .size_full()
            .items_start()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.render_sidebar(cx))
            .child(div().flex_1().h_full().p_6().child(panel))
    }
}
