//! CSV loader for the historical yield table.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Header
//! names are case-sensitive. Columns not listed below are ignored, which
//! lets the training dataset be used as-is.
//!
//! | Column        | Required | Type    | Notes                          |
//! |---------------|----------|---------|--------------------------------|
//! | `Year`        | yes      | integer | e.g. `1990`                    |
//! | `Area`        | yes      | string  | country or region              |
//! | `Item`        | yes      | string  | crop name                      |
//! | `hg/ha_yield` | yes      | number  | observed yield, hectograms/ha  |
//!
//! ### Example
//!
//! ```csv
//! ,Area,Item,Year,hg/ha_yield,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
//! 0,Albania,Maize,1990,36613,1485.0,121.0,16.37
//! 1,Albania,Potatoes,1990,66667,1485.0,121.0,16.37
//! ```
use std::{io::Read, path::Path};

use serde::Deserialize;
use tracing::{debug, info};
use yield_core::{HistoricalRecord, HistoricalTable};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Area")]
    area: String,
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "hg/ha_yield")]
    yield_hg_per_ha: f64,
}

/// Errors that can occur while loading the historical table.
#[derive(Debug, thiserror::Error)]
pub enum HistoryLoadError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column, or a cell of the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A yield cell parsed but is NaN, infinite or negative.
    #[error("invalid yield {value} on row {row}")]
    InvalidYield { value: f64, row: usize },
}

/// `row_number` is 1-based (header excluded).
fn convert_row(row: CsvRow, row_number: usize) -> Result<HistoricalRecord, HistoryLoadError> {
    if !row.yield_hg_per_ha.is_finite() || row.yield_hg_per_ha < 0.0 {
        return Err(HistoryLoadError::InvalidYield {
            value: row.yield_hg_per_ha,
            row: row_number,
        });
    }

    Ok(HistoricalRecord {
        year: row.year,
        region: row.area,
        crop: row.item,
        actual_yield: row.yield_hg_per_ha,
    })
}

/// Parse CSV from any reader. Rows are returned in file order.
pub fn load_from_reader<R: Read>(reader: R) -> Result<HistoricalTable, HistoryLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

pub fn load_from_str(input: &str) -> Result<HistoricalTable, HistoryLoadError> {
    load_from_reader(input.as_bytes())
}

/// Read the table from disk.
pub fn load_from_file(path: &Path) -> Result<HistoricalTable, HistoryLoadError> {
    debug!(path = %path.display(), "opening history");
    let file = std::fs::File::open(path).map_err(|source| HistoryLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = load_from_reader(file)?;
    info!(rows = table.len(), path = %path.display(), "history loaded");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DATASET_CSV: &str = "\
,Area,Item,Year,hg/ha_yield,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
0,Albania,Maize,1990,36613,1485.0,121.0,16.37
1,Albania,Potatoes,1990,66667,1485.0,121.0,16.37
2,Albania,\"Rice, paddy\",1990,23333,1485.0,121.0,16.37
";

    #[test]
    fn dataset_layout_parses_and_ignores_extra_columns() {
        let table = load_from_str(DATASET_CSV).expect("should parse dataset layout");

        assert_eq!(table.len(), 3);
        let first = &table.records()[0];
        assert_eq!(first.year, 1990);
        assert_eq!(first.region, "Albania");
        assert_eq!(first.crop, "Maize");
        assert_eq!(first.actual_yield, 36613.0);
    }

    #[test]
    fn quoted_crop_names_keep_their_commas() {
        let table = load_from_str(DATASET_CSV).unwrap();
        assert_eq!(table.records()[2].crop, "Rice, paddy");
    }

    #[test]
    fn minimal_columns_in_any_order() {
        let csv = "hg/ha_yield,Item,Year,Area\n30000,Rice,2018,India\n";
        let table = load_from_str(csv).expect("column order should not matter");

        assert_eq!(
            table.records(),
            &[HistoricalRecord {
                year: 2018,
                region: "India".to_string(),
                crop: "Rice".to_string(),
                actual_yield: 30000.0,
            }]
        );
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "Year , Area , Item , hg/ha_yield\n 2018 , India , Rice , 30000 \n";
        let table = load_from_str(csv).unwrap();

        assert_eq!(table.records()[0].region, "India");
        assert_eq!(table.records()[0].year, 2018);
    }

    #[test]
    fn missing_required_column_is_a_parse_error() {
        let csv = "Year,Area,hg/ha_yield\n2018,India,30000\n";

        match load_from_str(csv) {
            Err(HistoryLoadError::Parse(_)) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_yield_is_a_parse_error() {
        let csv = "Year,Area,Item,hg/ha_yield\n2018,India,Rice,plenty\n";
        assert!(matches!(load_from_str(csv), Err(HistoryLoadError::Parse(_))));
    }

    #[test]
    fn negative_yield_reports_its_row() {
        let csv = "Year,Area,Item,hg/ha_yield\n2018,India,Rice,1\n2019,India,Rice,-5\n";

        match load_from_str(csv) {
            Err(HistoryLoadError::InvalidYield { value, row }) => {
                assert_eq!(value, -5.0);
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidYield, got {other:?}"),
        }
    }

    #[test]
    fn header_only_is_an_empty_table() {
        let table = load_from_str("Year,Area,Item,hg/ha_yield\n").unwrap();
        assert!(table.is_empty());
    }
}
