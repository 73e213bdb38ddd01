pub mod analysis_error;
pub mod commands;
pub mod load_outcome;
pub mod output_format;
pub mod overall_status;
pub mod presenter_state;
pub mod provider_kind;
pub mod report_action;
pub mod route;
pub mod severity;
