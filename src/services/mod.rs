pub mod provider_factory;
pub mod providers;
pub mod report_exporter;
pub mod result_presenter;
