use serde::Serialize;
use crate::config::constants::FAILED_HEADLINE;
use crate::enums::analysis_error::AnalysisError;
use crate::enums::report_action::ReportAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailurePage {
    pub headline: &'static str,
    pub identifier: String,
    pub message: String,
    pub error: AnalysisError,
    pub retryable: bool,
    pub actions: Vec<ReportAction>,
}

impl FailurePage {
    pub fn new(identifier: &str, error: &AnalysisError) -> Self {
        Self {
            headline: FAILED_HEADLINE,
            identifier: identifier.to_string(),
            message: error.to_string(),
            error: error.clone(),
            retryable: error.is_retryable(),
            actions: vec![ReportAction::TryAgain, ReportAction::AnalyzeAnother],
        }
    }
}
