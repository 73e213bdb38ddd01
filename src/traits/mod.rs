pub mod analysis_provider;
pub mod navigator;
