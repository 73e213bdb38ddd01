use serde::Serialize;
use crate::enums::overall_status::OverallStatus;
use crate::structs::analysis_result::AnalysisResult;

/// Figures derived from a result on demand; never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub overall_status: OverallStatus,
    pub total_issues: usize,
}

impl ReportSummary {
    pub fn from_counts(violation_count: usize, warning_count: usize) -> Self {
        Self {
            overall_status: OverallStatus::classify(violation_count, warning_count),
            total_issues: violation_count + warning_count,
        }
    }

    pub fn from_result(result: &AnalysisResult) -> Self {
        Self::from_counts(result.violations.len(), result.warnings.len())
    }

    pub fn summary_text(&self) -> String {
        match self.total_issues {
            0 => "No significant guideline violations detected".to_string(),
            1 => "1 potential issue identified".to_string(),
            n => format!("{} potential issues identified", n),
        }
    }
}
