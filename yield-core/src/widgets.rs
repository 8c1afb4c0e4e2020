//! Bounds, defaults and labels of the prediction form's input widgets.

use thiserror::Error;

/// Error returned when a widget's text cannot be turned into a value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got '{input}'")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be a whole number, got '{input}'")]
    NotWhole { field: &'static str, input: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("no {field} selected")]
    NothingSelected { field: &'static str },
}

/// A bounded numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericField {
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub default: f64,
    pub step: f64,
    /// Number of decimals shown in the widget.
    pub decimals: usize,
}

pub const YEAR: NumericField = NumericField {
    label: "Year",
    min: Some(1900.0),
    max: Some(2100.0),
    default: 1990.0,
    step: 1.0,
    decimals: 0,
};

pub const RAINFALL: NumericField = NumericField {
    label: "Average Rainfall (mm per year)",
    min: None,
    max: None,
    default: 1485.0,
    step: 10.0,
    decimals: 2,
};

pub const PESTICIDES: NumericField = NumericField {
    label: "Pesticides (tonnes)",
    min: None,
    max: None,
    default: 121.0,
    step: 1.0,
    decimals: 2,
};

pub const TEMPERATURE: NumericField = NumericField {
    label: "Average Temperature (°C)",
    min: None,
    max: None,
    default: 16.37,
    step: 0.1,
    decimals: 2,
};

pub const AREA_LABEL: &str = "Area (Country/Region)";
pub const CROP_LABEL: &str = "Crop (Item)";

/// Trims whitespace and drops comma thousands separators.
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

impl NumericField {
    /// The default rendered the way the widget shows it.
    pub fn default_text(&self) -> String {
        format!("{:.*}", self.decimals, self.default)
    }

    /// Parses widget text and enforces the field's bounds.
    ///
    /// ```
    /// use yield_core::widgets::{FieldError, YEAR};
    ///
    /// assert_eq!(YEAR.parse(" 2,020 "), Ok(2020.0));
    /// assert!(matches!(YEAR.parse("1850"), Err(FieldError::OutOfRange { .. })));
    /// ```
    pub fn parse(&self, raw: &str) -> Result<f64, FieldError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(FieldError::Missing { field: self.label });
        }
        let value: f64 = normalized.parse().map_err(|_| FieldError::NotANumber {
            field: self.label,
            input: raw.trim().to_string(),
        })?;
        if !value.is_finite() {
            return Err(FieldError::NotANumber {
                field: self.label,
                input: raw.trim().to_string(),
            });
        }

        let below = self.min.is_some_and(|min| value < min);
        let above = self.max.is_some_and(|max| value > max);
        if below || above {
            return Err(FieldError::OutOfRange {
                field: self.label,
                min: self.min.unwrap_or(f64::MIN),
                max: self.max.unwrap_or(f64::MAX),
            });
        }
        Ok(value)
    }

    /// Like [`parse`](Self::parse) but also rejects fractional values.
    pub fn parse_whole(&self, raw: &str) -> Result<i32, FieldError> {
        let value = self.parse(raw)?;
        if value.fract() != 0.0 || value.abs() > f64::from(i32::MAX) {
            return Err(FieldError::NotWhole {
                field: self.label,
                input: raw.trim().to_string(),
            });
        }
        Ok(value as i32)
    }

    /// Moves `value` by `steps` increments, clamped to the field's bounds.
    pub fn stepped(&self, value: f64, steps: i32) -> f64 {
        let next = value + self.step * f64::from(steps);
        let next = self.min.map_or(next, |min| next.max(min));
        let next = self.max.map_or(next, |max| next.min(max));
        // keep the shown precision so repeated steps do not accumulate float noise
        let factor = 10f64.powi(self.decimals as i32);
        (next * factor).round() / factor
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_render_at_widget_precision() {
        assert_eq!(YEAR.default_text(), "1990");
        assert_eq!(RAINFALL.default_text(), "1485.00");
        assert_eq!(PESTICIDES.default_text(), "121.00");
        assert_eq!(TEMPERATURE.default_text(), "16.37");
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert_eq!(YEAR.parse_whole("1900"), Ok(1900));
        assert_eq!(YEAR.parse_whole("2100"), Ok(2100));
        assert!(matches!(
            YEAR.parse_whole("1899"),
            Err(FieldError::OutOfRange { .. })
        ));
        assert!(matches!(
            YEAR.parse_whole("2101"),
            Err(FieldError::OutOfRange { .. })
        ));
    }

    #[test]
    fn year_must_be_whole() {
        assert_eq!(
            YEAR.parse_whole("1990.5"),
            Err(FieldError::NotWhole {
                field: "Year",
                input: "1990.5".to_string(),
            })
        );
    }

    #[test]
    fn unbounded_fields_accept_any_finite_number() {
        assert_eq!(RAINFALL.parse("1,485.5"), Ok(1485.5));
        assert_eq!(TEMPERATURE.parse("-3.2"), Ok(-3.2));
    }

    #[test]
    fn empty_and_garbage_are_rejected() {
        assert_eq!(
            PESTICIDES.parse("   "),
            Err(FieldError::Missing {
                field: "Pesticides (tonnes)"
            })
        );
        assert!(matches!(
            PESTICIDES.parse("lots"),
            Err(FieldError::NotANumber { .. })
        ));
        assert!(matches!(
            PESTICIDES.parse("inf"),
            Err(FieldError::NotANumber { .. })
        ));
    }

    #[test]
    fn stepping_clamps_to_bounds() {
        assert_eq!(YEAR.stepped(2100.0, 1), 2100.0);
        assert_eq!(YEAR.stepped(1900.0, -1), 1900.0);
        assert_eq!(TEMPERATURE.stepped(16.37, 1), 16.47);
        assert_eq!(RAINFALL.stepped(1485.0, -2), 1465.0);
    }
}
