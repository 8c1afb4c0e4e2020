use std::fmt;

use crate::models::InputRecord;
use crate::session::SessionState;

pub const NO_INPUTS_MESSAGE: &str = "No inputs available. Please make a prediction first.";

/// A single cell of the summary table's value column.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Integer(i32),
    Float(f64),
    Text(String),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" on whole numbers
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub field: &'static str,
    pub value: SummaryValue,
}

/// What the summary view shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryPanel {
    Empty { message: &'static str },
    Table { rows: Vec<SummaryRow> },
}

impl SummaryPanel {
    pub const HEADERS: (&'static str, &'static str) = ("Parameter", "Value");

    pub fn render(session: &SessionState) -> Self {
        match session.input_record() {
            Some(input) => Self::Table {
                rows: Self::rows(input),
            },
            None => Self::Empty {
                message: NO_INPUTS_MESSAGE,
            },
        }
    }

    /// The six fields of `input`, in display order.
    pub fn rows(input: &InputRecord) -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                field: "Year",
                value: SummaryValue::Integer(input.year),
            },
            SummaryRow {
                field: "Rainfall",
                value: SummaryValue::Float(input.rainfall),
            },
            SummaryRow {
                field: "Pesticides",
                value: SummaryValue::Float(input.pesticides),
            },
            SummaryRow {
                field: "Temperature",
                value: SummaryValue::Float(input.temperature),
            },
            SummaryRow {
                field: "Area",
                value: SummaryValue::Text(input.region.clone()),
            },
            SummaryRow {
                field: "Crop",
                value: SummaryValue::Text(input.crop.clone()),
            },
        ]
    }
}
