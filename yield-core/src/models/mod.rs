mod categories;
mod historical_record;
mod input_record;
mod prediction;
mod view_selector;

pub use categories::{CategoryEnumeration, DEFAULT_CROP, DEFAULT_REGION};
pub use historical_record::{HistoricalRecord, HistoricalTable};
pub use input_record::{ColumnValue, InputColumn, InputRecord};
pub use prediction::{PredictionResult, Submission};
pub use view_selector::ViewSelector;
