use serde::{Deserialize, Serialize};

/// Region used when the preprocessor's categories cannot be recovered.
pub const DEFAULT_REGION: &str = "India";
/// Crop used when the preprocessor's categories cannot be recovered.
pub const DEFAULT_CROP: &str = "Rice";

/// Valid values for the two selection widgets, in fitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEnumeration {
    pub regions: Vec<String>,
    pub crops: Vec<String>,
}

impl CategoryEnumeration {
    pub fn new(regions: Vec<String>, crops: Vec<String>) -> Self {
        Self { regions, crops }
    }

    /// Single-element fallback pair.
    pub fn fallback() -> Self {
        Self {
            regions: vec![DEFAULT_REGION.to_string()],
            crops: vec![DEFAULT_CROP.to_string()],
        }
    }

    /// Both lists must be non-empty to populate a selector.
    pub fn is_usable(&self) -> bool {
        !self.regions.is_empty() && !self.crops.is_empty()
    }
}

impl Default for CategoryEnumeration {
    fn default() -> Self {
        Self::fallback()
    }
}
