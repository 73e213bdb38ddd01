pub mod failure_page;
pub mod finding_view;
pub mod report_page;
pub mod report_view;
