//! Read-only panels: home, summary table, trend chart and notices.

use gpui::{
    AnyElement, App, Div, FontWeight, Hsla, IntoElement, ParentElement, SharedString, Styled,
    TextAlign, div, px, rgb,
};
use gpui_component::chart::LineChart;
use gpui_component::{ActiveTheme, h_flex, v_flex};
use yield_core::views::{HomePanel, SummaryPanel, TrendChart, TrendPanel, TrendPoint};

/// Tone of a notice banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn color(self, cx: &App) -> Hsla {
        match self {
            Self::Success => cx.theme().success,
            Self::Warning => cx.theme().warning,
            Self::Error => cx.theme().danger,
        }
    }
}

pub fn make_notice(kind: NoticeKind, text: impl Into<SharedString>, cx: &App) -> Div {
    let color = kind.color(cx);
    div()
        .w_full()
        .px_3()
        .py_2()
        .rounded_md()
        .border_1()
        .border_color(color)
        .bg(color.opacity(0.1))
        .child(text.into())
}

pub fn make_heading(text: impl Into<SharedString>) -> Div {
    div()
        .text_2xl()
        .font_weight(FontWeight::BOLD)
        .child(text.into())
}

pub fn home_panel(panel: &HomePanel) -> AnyElement {
    v_flex()
        .gap_3()
        .child(make_heading(panel.title))
        .child(div().child(panel.intro))
        .child(
            v_flex()
                .gap_1()
                .pl_4()
                .children(panel.features.iter().map(|f| div().child(format!("• {f}")))),
        )
        .child(div().pt_2().child(panel.call_to_action))
        .into_any_element()
}

pub fn summary_panel(panel: &SummaryPanel, cx: &App) -> AnyElement {
    let rows = match panel {
        SummaryPanel::Empty { message } => {
            return make_notice(NoticeKind::Warning, *message, cx).into_any_element();
        }
        SummaryPanel::Table { rows } => rows,
    };

    let border = cx.theme().border;
    let (field_header, value_header) = SummaryPanel::HEADERS;
    let cell = || div().flex_1().px_3().py_2();

    let header = h_flex()
        .font_weight(FontWeight::SEMIBOLD)
        .border_b_1()
        .border_color(border)
        .child(cell().child(field_header))
        .child(cell().child(value_header));

    v_flex()
        .gap_3()
        .child(make_heading("📋 Input Summary"))
        .child(
            v_flex()
                .w(px(520.))
                .border_1()
                .border_color(border)
                .rounded_md()
                .child(header)
                .children(rows.iter().map(|row| {
                    h_flex()
                        .border_b_1()
                        .border_color(border)
                        .child(cell().child(row.field))
                        .child(cell().child(row.value.to_string()))
                })),
        )
        .into_any_element()
}

pub fn trend_panel(panel: &TrendPanel, cx: &App) -> AnyElement {
    let body = match panel {
        TrendPanel::Chart(chart) => trend_chart(chart, cx),
        other => match other.warning() {
            Some(warning) => make_notice(NoticeKind::Warning, warning, cx).into_any_element(),
            None => div().into_any_element(),
        },
    };

    v_flex()
        .gap_3()
        .child(make_heading("📊 Yield Trend Based on Inputs"))
        .child(body)
        .into_any_element()
}

fn trend_chart(chart: &TrendChart, cx: &App) -> AnyElement {
    let line = LineChart::new(chart.points.clone())
        .x(|p: &TrendPoint| SharedString::from(p.year.to_string()))
        .y(|p: &TrendPoint| p.actual_yield)
        .stroke(rgb(chart.line_color));
    let line = if chart.markers { line.dot() } else { line };

    let muted = cx.theme().muted_foreground;

    v_flex()
        .gap_2()
        .w_full()
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .child(chart.title.clone()),
        )
        .child(
            h_flex()
                .w_full()
                .gap_2()
                .child(div().text_sm().text_color(muted).child(chart.y_label))
                .child(div().flex_1().h(px(360.)).child(line)),
        )
        .child(
            div()
                .w_full()
                .text_sm()
                .text_color(muted)
                .text_align(TextAlign::Center)
                .child(chart.x_label),
        )
        .into_any_element()
}
