use std::sync::Arc;
use crate::enums::provider_kind::ProviderKind;
use crate::errors::{GramcheckError, GramcheckResult};
use crate::services::providers::directory_provider::DirectoryAnalysisProvider;
use crate::services::providers::http_provider::HttpAnalysisProvider;
use crate::structs::config::provider_config::ProviderConfig;
use crate::traits::analysis_provider::AnalysisProvider;

pub struct ProviderFactory;

impl ProviderFactory {
    pub fn from_config(config: &ProviderConfig) -> GramcheckResult<Arc<dyn AnalysisProvider>> {
        match config.kind {
            ProviderKind::Http => Ok(Arc::new(HttpAnalysisProvider::from_config(config))),
            ProviderKind::Directory => {
                let results_dir = config.results_dir.as_deref().ok_or_else(|| {
                    GramcheckError::config_error(
                        "results_dir is required for the directory provider",
                        Some("provider.results_dir"),
                        Some("Point it at a folder of {username}.json analysis files"),
                    )
                })?;
                Ok(Arc::new(DirectoryAnalysisProvider::new(results_dir)))
            }
        }
    }
}
