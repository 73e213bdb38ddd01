use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::enums::provider_kind::ProviderKind;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: Option<String>,

    #[serde(default)]
    pub results_dir: Option<String>,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            base_url: ConfigHelper::default_base_url(),
            api_key_env: ConfigHelper::default_api_key_env(),
            results_dir: None,
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}
