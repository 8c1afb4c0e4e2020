use std::fmt;

use serde::{Deserialize, Serialize};

/// The four mutually exclusive views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewSelector {
    #[default]
    Home,
    Predict,
    Summary,
    Trend,
}

impl ViewSelector {
    pub fn all() -> &'static [ViewSelector] {
        &[
            ViewSelector::Home,
            ViewSelector::Predict,
            ViewSelector::Summary,
            ViewSelector::Trend,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Predict => "predict",
            Self::Summary => "summary",
            Self::Trend => "trend",
        }
    }
}

impl fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
