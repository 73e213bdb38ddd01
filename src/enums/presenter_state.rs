use std::sync::Arc;
use crate::enums::analysis_error::AnalysisError;
use crate::structs::analysis_result::AnalysisResult;

/// Lifecycle of the result presenter for the current identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterState {
    /// Nothing requested yet, or the presenter was unmounted.
    Idle,
    /// No identifier was supplied; the entry view was requested instead.
    Redirected,
    Loading { identifier: String },
    Loaded(Arc<AnalysisResult>),
    Failed { identifier: String, error: AnalysisError },
}

impl PresenterState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PresenterState::Loading { .. })
    }

    pub fn result(&self) -> Option<&Arc<AnalysisResult>> {
        match self {
            PresenterState::Loaded(result) => Some(result),
            _ => None,
        }
    }
}
