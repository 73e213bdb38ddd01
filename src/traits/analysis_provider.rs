use async_trait::async_trait;
use crate::enums::analysis_error::AnalysisError;
use crate::structs::analysis_result::AnalysisResult;

#[async_trait]
pub trait AnalysisProvider: Send + Sync {

    /// Produces the analysis for an already-decoded account identifier.
    /// Identifier validation is the provider's job.
    async fn analyze(&self, identifier: &str) -> Result<AnalysisResult, AnalysisError>;

    fn name(&self) -> &'static str;
}
