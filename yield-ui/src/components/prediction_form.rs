use gpui::{
    App, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window,
};
use gpui_component::{
    IndexPath, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState, MaskPattern},
    select::{Select, SelectState},
    v_flex,
};
use tracing::debug;
use yield_core::CategoryEnumeration;
use yield_core::views::PredictionForm;
use yield_core::widgets::{self, NumericField};

use crate::components::make_labeled_field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericInput {
    Year,
    Rainfall,
    Pesticides,
    Temperature,
}

impl NumericInput {
    fn field(self) -> NumericField {
        match self {
            Self::Year => widgets::YEAR,
            Self::Rainfall => widgets::RAINFALL,
            Self::Pesticides => widgets::PESTICIDES,
            Self::Temperature => widgets::TEMPERATURE,
        }
    }

    /// Ids of the decrement and increment buttons.
    fn step_ids(self) -> (&'static str, &'static str) {
        match self {
            Self::Year => ("year-down", "year-up"),
            Self::Rainfall => ("rainfall-down", "rainfall-up"),
            Self::Pesticides => ("pesticides-down", "pesticides-up"),
            Self::Temperature => ("temperature-down", "temperature-up"),
        }
    }

    /// Temperatures can be negative, which the number mask does not allow.
    fn mask(self) -> Option<MaskPattern> {
        match self {
            Self::Temperature => None,
            _ => Some(MaskPattern::Number {
                separator: None,
                fraction: Some(self.field().decimals),
            }),
        }
    }
}

type CategorySelect = Entity<SelectState<Vec<SharedString>>>;

/// The six input widgets of the prediction panel.
pub struct PredictionFormView {
    year: Entity<InputState>,
    rainfall: Entity<InputState>,
    pesticides: Entity<InputState>,
    temperature: Entity<InputState>,
    region: CategorySelect,
    crop: CategorySelect,
}

impl PredictionFormView {
    pub fn new(categories: &CategoryEnumeration, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let defaults = PredictionForm::with_defaults(categories);

        Self {
            year: make_numeric_state(NumericInput::Year, defaults.year, window, cx),
            rainfall: make_numeric_state(NumericInput::Rainfall, defaults.rainfall, window, cx),
            pesticides: make_numeric_state(NumericInput::Pesticides, defaults.pesticides, window, cx),
            temperature: make_numeric_state(
                NumericInput::Temperature,
                defaults.temperature,
                window,
                cx,
            ),
            region: make_select_state(&categories.regions, defaults.region.as_deref(), window, cx),
            crop: make_select_state(&categories.crops, defaults.crop.as_deref(), window, cx),
        }
    }

    /// Current widget contents, unparsed.
    pub fn to_form(&self, cx: &App) -> PredictionForm {
        let text = |state: &Entity<InputState>| state.read(cx).value().to_string();
        let choice = |state: &CategorySelect| state.read(cx).selected_value().map(|v| v.to_string());

        PredictionForm {
            year: text(&self.year),
            rainfall: text(&self.rainfall),
            pesticides: text(&self.pesticides),
            temperature: text(&self.temperature),
            region: choice(&self.region),
            crop: choice(&self.crop),
        }
    }

    fn state(&self, input: NumericInput) -> &Entity<InputState> {
        match input {
            NumericInput::Year => &self.year,
            NumericInput::Rainfall => &self.rainfall,
            NumericInput::Pesticides => &self.pesticides,
            NumericInput::Temperature => &self.temperature,
        }
    }

    /// Unparseable text restarts from the field default.
    fn step(&mut self, input: NumericInput, steps: i32, window: &mut Window, cx: &mut Context<Self>) {
        let field = input.field();
        let state = self.state(input).clone();
        let current = field.parse(&state.read(cx).value()).unwrap_or(field.default);
        let next = format!("{:.*}", field.decimals, field.stepped(current, steps));

        debug!(field = field.label, %next, "stepped");
        state.update(cx, |state, cx| state.set_value(next, window, cx));
    }

    fn numeric_row(&self, input: NumericInput, cx: &mut Context<Self>) -> Div {
        let (down_id, up_id) = input.step_ids();

        make_labeled_field(input.field().label).child(
            h_flex()
                .gap_1()
                .child(Input::new(self.state(input)).flex_grow())
                .child(
                    Button::new(down_id)
                        .ghost()
                        .small()
                        .label("−")
                        .on_click(cx.listener(move |this, _, window, cx| {
                            this.step(input, -1, window, cx)
                        })),
                )
                .child(
                    Button::new(up_id)
                        .ghost()
                        .small()
                        .label("+")
                        .on_click(cx.listener(move |this, _, window, cx| {
                            this.step(input, 1, window, cx)
                        })),
                ),
        )
    }
}

impl Render for PredictionFormView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .gap_6()
            .items_start()
            .child(
                v_flex()
                    .flex_1()
                    .gap_3()
                    .child(self.numeric_row(NumericInput::Year, cx))
                    .child(self.numeric_row(NumericInput::Rainfall, cx))
                    .child(self.numeric_row(NumericInput::Pesticides, cx)),
            )
            .child(
                v_flex()
                    .flex_1()
                    .gap_3()
                    .child(self.numeric_row(NumericInput::Temperature, cx))
                    .child(
                        make_labeled_field(widgets::AREA_LABEL)
                            .child(Select::new(&self.region).w_full()),
                    )
                    .child(
                        make_labeled_field(widgets::CROP_LABEL)
                            .child(Select::new(&self.crop).w_full()),
                    ),
            )
    }
}

fn make_numeric_state(
    input: NumericInput,
    initial: String,
    window: &mut Window,
    cx: &mut Context<PredictionFormView>,
) -> Entity<InputState> {
    cx.new(|cx| {
        let state = InputState::new(window, cx)
            .placeholder(input.field().label)
            .default_value(initial);
        match input.mask() {
            Some(pattern) => state.mask_pattern(pattern),
            None => state,
        }
    })
}

fn make_select_state(
    options: &[String],
    selected: Option<&str>,
    window: &mut Window,
    cx: &mut Context<PredictionFormView>,
) -> CategorySelect {
    let items: Vec<SharedString> = options.iter().cloned().map(SharedString::from).collect();
    let initial_index = selected
        .and_then(|s| items.iter().position(|item| item.as_ref() == s))
        .map(|i| IndexPath::default().row(i));

    cx.new(|cx| SelectState::new(items, initial_index, window, cx))
}
