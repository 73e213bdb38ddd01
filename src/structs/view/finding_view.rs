use serde::Serialize;
use crate::structs::finding::Finding;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingView {
    pub category: String,
    pub severity_badge: String,
    pub confidence_percent: u32,
    pub description: String,
    pub examples: Vec<String>,
}

impl FindingView {
    pub fn confidence_label(&self) -> String {
        format!("{}% confidence", self.confidence_percent)
    }
}

impl From<&Finding> for FindingView {
    fn from(finding: &Finding) -> Self {
        Self {
            category: finding.category.clone(),
            severity_badge: finding.severity.badge(),
            confidence_percent: finding.confidence_percent(),
            description: finding.description.clone(),
            examples: finding.examples.clone(),
        }
    }
}
