use serde::{Deserialize, Serialize};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::provider_config::ProviderConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
