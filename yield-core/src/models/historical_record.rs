use serde::{Deserialize, Serialize};

/// One row of the historical yield table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub year: i32,
    pub region: String,
    pub crop: String,
    /// Observed yield in hectograms per hectare.
    pub actual_yield: f64,
}

/// Read-only table of historical observations, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalTable {
    records: Vec<HistoricalRecord>,
}

impl HistoricalTable {
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// Rows whose region and crop match exactly (case-sensitive), in source order.
    pub fn matching<'a>(
        &'a self,
        region: &'a str,
        crop: &'a str,
    ) -> impl Iterator<Item = &'a HistoricalRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.region == region && r.crop == crop)
    }
}

impl FromIterator<HistoricalRecord> for HistoricalTable {
    fn from_iter<I: IntoIterator<Item = HistoricalRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
