use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::enums::provider_kind::ProviderKind;
use crate::errors::{GramcheckError, GramcheckResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

const SAMPLE_CONFIG: &str = r#"# Gramcheck Configuration

[provider]
# Where analysis results come from: "http" or "directory"
kind = "http"

# Analysis service root; results are fetched from {base_url}/accounts/{username}/analysis
base_url = "http://127.0.0.1:9400/v1"

# Environment variable holding the bearer token for the analysis service
api_key_env = "GRAMCHECK_API_KEY"

# Directory of precomputed {username}.json results (kind = "directory")
# results_dir = "/var/lib/gramcheck/results"

# Give up on the analysis service after this many seconds
timeout_secs = 30

[server]
port = 8080
open_browser = false

[output]
# Where exported (printable) reports are written
export_dir = "./gramcheck-reports"

# Open exported reports in the default browser for printing
open_exports = true

# ANSI colours in terminal reports
color = true
"#;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load(path: Option<&Path>) -> GramcheckResult<Config> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if config_path.exists() {
            log::info!("📋 Loading config from: {}", config_path.display());
            let content = fs::read_to_string(&config_path).map_err(|e| GramcheckError::ConfigurationFileError {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        if path.is_some() {
            return Err(GramcheckError::ConfigurationFileError {
                path: config_path.display().to_string(),
                reason: "file does not exist".to_string(),
            });
        }

        log::debug!("No config at {}, using defaults", config_path.display());
        Ok(Config::default())
    }

    pub fn create_sample_config(path: Option<&Path>) -> GramcheckResult<PathBuf> {
        let config_file_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if config_file_path.exists() {
            return Err(GramcheckError::config_error(
                "configuration file already exists",
                None,
                Some(&format!("Edit {} or remove it first", config_file_path.display())),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)
            .map_err(|e| GramcheckError::file_error(&config_file_path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match config.provider.kind {
            ProviderKind::Http => {
                let base_url = config.provider.base_url.trim();
                if base_url.is_empty() {
                    errors.push("provider.base_url is required for the http provider".to_string());
                } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    errors.push(format!("provider.base_url must be an http(s) URL: {}", base_url));
                }
            }
            ProviderKind::Directory => match &config.provider.results_dir {
                None => errors.push("provider.results_dir is required for the directory provider".to_string()),
                Some(dir) if !Path::new(dir).is_dir() => {
                    errors.push(format!("provider.results_dir does not exist: {}", dir));
                }
                Some(_) => {}
            },
        }

        if config.provider.timeout_secs == 0 {
            errors.push("provider.timeout_secs must be greater than zero".to_string());
        }

        if config.server.port == 0 {
            errors.push("server.port must be greater than zero".to_string());
        }

        if config.output.export_dir.trim().is_empty() {
            errors.push("output.export_dir must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Loads and validates in one step, folding validation problems into a
    /// single error.
    pub fn load_validated(path: Option<&Path>) -> GramcheckResult<Config> {
        let config = Self::load(path)?;
        Self::validate_config(&config).map_err(|problems| GramcheckError::MultipleErrors {
            errors: problems
                .iter()
                .map(|p| GramcheckError::config_error(p, None, None))
                .collect(),
            context: "configuration validation".to_string(),
        })?;
        Ok(config)
    }
}
