use std::fmt;

use serde::{Deserialize, Serialize};

/// One set of agronomic parameters submitted from the prediction form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub year: i32,
    /// Average rainfall in mm per year.
    pub rainfall: f64,
    /// Pesticide usage in tonnes.
    pub pesticides: f64,
    /// Average temperature in °C.
    pub temperature: f64,
    /// Country or region ("Area" in the training data).
    pub region: String,
    /// Crop ("Item" in the training data).
    pub crop: String,
}

/// Column names the preprocessor was fitted against.
///
/// The serialized names match the training data headers exactly, so a
/// fitted transformer can refer to them without a mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputColumn {
    #[serde(rename = "Year")]
    Year,
    #[serde(rename = "average_rain_fall_mm_per_year")]
    Rainfall,
    #[serde(rename = "pesticides_tonnes")]
    Pesticides,
    #[serde(rename = "avg_temp")]
    Temperature,
    #[serde(rename = "Area")]
    Area,
    #[serde(rename = "Item")]
    Item,
}

impl InputColumn {
    pub fn all() -> &'static [InputColumn] {
        &[
            InputColumn::Year,
            InputColumn::Rainfall,
            InputColumn::Pesticides,
            InputColumn::Temperature,
            InputColumn::Area,
            InputColumn::Item,
        ]
    }

    /// Header name used by the training data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Rainfall => "average_rain_fall_mm_per_year",
            Self::Pesticides => "pesticides_tonnes",
            Self::Temperature => "avg_temp",
            Self::Area => "Area",
            Self::Item => "Item",
        }
    }
}

impl fmt::Display for InputColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell of an [`InputRecord`] as seen by the preprocessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl InputRecord {
    pub fn value(&self, column: InputColumn) -> ColumnValue<'_> {
        match column {
            InputColumn::Year => ColumnValue::Number(f64::from(self.year)),
            InputColumn::Rainfall => ColumnValue::Number(self.rainfall),
            InputColumn::Pesticides => ColumnValue::Number(self.pesticides),
            InputColumn::Temperature => ColumnValue::Number(self.temperature),
            InputColumn::Area => ColumnValue::Text(&self.region),
            InputColumn::Item => ColumnValue::Text(&self.crop),
        }
    }
}

impl fmt::Display for InputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year={} rainfall={} pesticides={} temperature={} area={} crop={}",
            self.year, self.rainfall, self.pesticides, self.temperature, self.region, self.crop
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record() -> InputRecord {
        InputRecord {
            year: 2020,
            rainfall: 1200.0,
            pesticides: 100.0,
            temperature: 20.0,
            region: "India".to_string(),
            crop: "Rice".to_string(),
        }
    }

    #[test]
    fn value_maps_every_column() {
        let r = record();

        assert_eq!(r.value(InputColumn::Year), ColumnValue::Number(2020.0));
        assert_eq!(r.value(InputColumn::Rainfall), ColumnValue::Number(1200.0));
        assert_eq!(r.value(InputColumn::Pesticides), ColumnValue::Number(100.0));
        assert_eq!(r.value(InputColumn::Temperature), ColumnValue::Number(20.0));
        assert_eq!(r.value(InputColumn::Area), ColumnValue::Text("India"));
        assert_eq!(r.value(InputColumn::Item), ColumnValue::Text("Rice"));
    }

    #[test]
    fn column_names_round_trip_through_serde() {
        for column in InputColumn::all() {
            let json = serde_json::to_string(column).unwrap();
            assert_eq!(json, format!("\"{}\"", column.as_str()));
            let back: InputColumn = serde_json::from_str(&json).unwrap();
            assert_eq!(&back, column);
        }
    }
}
