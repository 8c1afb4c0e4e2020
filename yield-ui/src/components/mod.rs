pub mod panels;
pub mod prediction_form;

use gpui::{App, ClickEvent, Div, ParentElement, SharedString, Styled, Window, div};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{Sizable, v_flex};
use yield_core::NavAction;

pub use prediction_form::PredictionFormView;

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .label(label.into())
        .on_click(on_click)
}

/// Sidebar entry; the button for the current view is highlighted.
pub fn make_nav_button(
    action: NavAction,
    selected: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    let button = Button::new(action.id()).label(action.label()).w_full();
    let button = if selected {
        button.primary()
    } else {
        button.ghost()
    };
    button.on_click(on_click)
}

/// A caption stacked above whatever the caller adds as children.
pub fn make_labeled_field(label: impl Into<SharedString>) -> Div {
    v_flex()
        .gap_1()
        .w_full()
        .child(div().text_sm().child(label.into()))
}
