pub mod analysis_result;
pub mod cli;
pub mod config;
pub mod finding;
pub mod passed_check;
pub mod report_summary;
pub mod view;
