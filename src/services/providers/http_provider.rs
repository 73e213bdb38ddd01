use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use crate::enums::analysis_error::AnalysisError;
use crate::helpers::identifier_helper::normalize_username;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::provider_config::ProviderConfig;
use crate::traits::analysis_provider::AnalysisProvider;

/// Fetches analyses from a remote analysis service.
#[derive(Clone)]
pub struct HttpAnalysisProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpAnalysisProvider {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        let api_key = config
            .api_key_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            log::debug!("No API key configured for the analysis service");
        }
        Self::new(&config.base_url, api_key)
    }

    // Normalized usernames only hold [a-z0-9._], so they are path-safe as is.
    fn analysis_url(&self, username: &str) -> String {
        format!("{}/accounts/{}/analysis", self.base_url, username)
    }
}

#[async_trait]
impl AnalysisProvider for HttpAnalysisProvider {
    async fn analyze(&self, identifier: &str) -> Result<AnalysisResult, AnalysisError> {
        let username = normalize_username(identifier)?;
        let url = self.analysis_url(&username);
        log::debug!("GET {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(AnalysisError::NotFound { identifier: username });
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AnalysisError::failure(format!("analysis service rejected credentials (HTTP {})", status.as_u16()))
                }
                _ => AnalysisError::failure(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let result: AnalysisResult = response.json().await?;
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
