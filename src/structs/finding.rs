use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub category: String,
    #[serde(default)]
    pub severity: Severity,
    pub confidence: f64,
    pub description: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Finding {
    /// Confidence as a whole percentage, rounded half up.
    pub fn confidence_percent(&self) -> u32 {
        let percent = (self.confidence * 100.0).round();
        if percent.is_nan() {
            return 0;
        }
        percent.clamp(0.0, 100.0) as u32
    }
}
