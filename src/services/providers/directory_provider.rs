use std::io::ErrorKind;
use std::path::PathBuf;
use async_trait::async_trait;
use crate::enums::analysis_error::AnalysisError;
use crate::helpers::identifier_helper::normalize_username;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::analysis_provider::AnalysisProvider;

/// Serves precomputed analyses stored as `{username}.json` files.
pub struct DirectoryAnalysisProvider {
    results_dir: PathBuf,
}

impl DirectoryAnalysisProvider {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }
}

#[async_trait]
impl AnalysisProvider for DirectoryAnalysisProvider {
    async fn analyze(&self, identifier: &str) -> Result<AnalysisResult, AnalysisError> {
        let username = normalize_username(identifier)?;
        let path = self.results_dir.join(format!("{}.json", username));

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AnalysisError::NotFound { identifier: username });
            }
            Err(e) => {
                return Err(AnalysisError::failure(format!("could not read {}: {}", path.display(), e)));
            }
        };

        let result: AnalysisResult = serde_json::from_str(&content)?;
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
