use serde::Serialize;
use thiserror::Error;

/// Failure raised by an analysis provider. Every variant is an analysis
/// failure from the presenter's point of view; the variants only refine the
/// message and whether a retry can help.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisError {
    #[error("Analysis failed: {reason}")]
    Failure { reason: String },

    #[error("No analysis available for account '{identifier}'")]
    NotFound { identifier: String },

    #[error("Invalid account identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    #[error("Analysis timed out after {millis} ms")]
    Timeout { millis: u64 },

    #[error("Network error: {reason}")]
    Network { reason: String },
}

impl AnalysisError {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure { reason: reason.into() }
    }

    pub fn invalid_identifier(identifier: &str, reason: &str) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } | Self::Failure { .. } => true,
            Self::NotFound { .. } | Self::InvalidIdentifier { .. } => false,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            AnalysisError::failure(format!("malformed analysis response: {}", error))
        } else {
            AnalysisError::Network { reason: error.to_string() }
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        AnalysisError::failure(format!("malformed analysis result: {}", error))
    }
}
