use serde::Serialize;

/// User actions offered below a report or a failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportAction {
    AnalyzeAnother,
    ExportReport,
    TryAgain,
}

impl ReportAction {
    pub fn label(&self) -> &'static str {
        match self {
            ReportAction::AnalyzeAnother => "Analyze Another Account",
            ReportAction::ExportReport => "Export Report",
            ReportAction::TryAgain => "Try Again",
        }
    }
}
