use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::finding::Finding;
use crate::structs::passed_check::PassedCheck;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub account_username: String,
    pub analysis_date: DateTime<Utc>,
    #[serde(default)]
    pub violations: Vec<Finding>,
    #[serde(default)]
    pub warnings: Vec<Finding>,
    #[serde(default)]
    pub passed: Vec<PassedCheck>,
}
