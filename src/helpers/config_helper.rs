use crate::config::constants::{DEFAULT_API_KEY_ENV, DEFAULT_PROVIDER_TIMEOUT_SECS, DEFAULT_SERVER_PORT};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        "http://127.0.0.1:9400/v1".to_string()
    }

    pub fn default_api_key_env() -> Option<String> {
        Some(DEFAULT_API_KEY_ENV.to_string())
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_PROVIDER_TIMEOUT_SECS
    }

    pub fn default_server_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_export_dir() -> String {
        "./gramcheck-reports".to_string()
    }

    pub fn default_open_exports() -> bool {
        true
    }

    pub fn default_color() -> bool {
        true
    }
}
