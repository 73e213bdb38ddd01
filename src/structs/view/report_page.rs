use chrono::{DateTime, Utc};
use serde::Serialize;
use crate::config::constants::{DISCLAIMER, REPORT_TITLE};
use crate::enums::overall_status::OverallStatus;
use crate::enums::report_action::ReportAction;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::passed_check::PassedCheck;
use crate::structs::report_summary::ReportSummary;
use crate::structs::view::finding_view::FindingView;

/// Everything a renderer needs to draw a loaded report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPage {
    pub title: &'static str,
    pub account_username: String,
    pub analysis_date: DateTime<Utc>,
    pub status: OverallStatus,
    pub total_issues: usize,
    pub headline: &'static str,
    pub summary: String,
    pub violations: Vec<FindingView>,
    pub warnings: Vec<FindingView>,
    pub passed: Vec<PassedCheck>,
    pub disclaimer: &'static str,
    pub actions: Vec<ReportAction>,
}

impl ReportPage {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let summary = ReportSummary::from_result(result);
        Self {
            title: REPORT_TITLE,
            account_username: result.account_username.clone(),
            analysis_date: result.analysis_date,
            status: summary.overall_status,
            total_issues: summary.total_issues,
            headline: summary.overall_status.headline(),
            summary: summary.summary_text(),
            violations: result.violations.iter().map(FindingView::from).collect(),
            warnings: result.warnings.iter().map(FindingView::from).collect(),
            passed: result.passed.clone(),
            disclaimer: DISCLAIMER,
            actions: vec![ReportAction::AnalyzeAnother, ReportAction::ExportReport],
        }
    }

    pub fn analysis_date_display(&self) -> String {
        self.analysis_date.format("%B %-d, %Y").to_string()
    }

    pub fn violations_heading(&self) -> Option<String> {
        (!self.violations.is_empty()).then(|| format!("Policy Violations ({})", self.violations.len()))
    }

    pub fn warnings_heading(&self) -> Option<String> {
        (!self.warnings.is_empty()).then(|| format!("Potential Issues ({})", self.warnings.len()))
    }

    pub fn passed_heading(&self) -> String {
        format!("Passed Guidelines ({})", self.passed.len())
    }
}
