use serde::Serialize;
use crate::config::constants::LOADING_MESSAGE;
use crate::enums::presenter_state::PresenterState;
use crate::structs::view::failure_page::FailurePage;
use crate::structs::view::report_page::ReportPage;

/// Which screen to draw for a presenter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ReportView {
    Entry,
    Loading { message: &'static str },
    Failed(FailurePage),
    Report(ReportPage),
}

impl ReportView {
    pub fn from_state(state: &PresenterState) -> Self {
        match state {
            PresenterState::Idle | PresenterState::Redirected => ReportView::Entry,
            PresenterState::Loading { .. } => ReportView::Loading { message: LOADING_MESSAGE },
            PresenterState::Failed { identifier, error } => ReportView::Failed(FailurePage::new(identifier, error)),
            PresenterState::Loaded(result) => ReportView::Report(ReportPage::from_result(result)),
        }
    }
}
