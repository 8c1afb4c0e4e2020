/// Static content of the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomePanel {
    pub title: &'static str,
    pub intro: &'static str,
    pub features: &'static [&'static str],
    pub call_to_action: &'static str,
}

impl HomePanel {
    pub const fn new() -> Self {
        Self {
            title: "🌾 Crop Yield Prediction",
            intro: "Welcome to the AI-powered Crop Yield Prediction System. Use this tool to:",
            features: &[
                "Predict crop yield based on rainfall, pesticides, temperature, and region.",
                "View a summary of your inputs.",
                "Explore historical yield trends with interactive graphs.",
            ],
            call_to_action: "👉 Navigate to the Prediction tab from the sidebar to start.",
        }
    }
}

impl Default for HomePanel {
    fn default() -> Self {
        Self::new()
    }
}
