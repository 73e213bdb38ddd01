use serde::{Deserialize, Serialize};

/// Headline classification of a report. Violations always outrank warnings;
/// confidence values never weigh in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Violations,
    Warnings,
    Clean,
}

impl OverallStatus {
    pub fn classify(violation_count: usize, warning_count: usize) -> Self {
        if violation_count > 0 {
            OverallStatus::Violations
        } else if warning_count > 0 {
            OverallStatus::Warnings
        } else {
            OverallStatus::Clean
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Violations => "violations",
            OverallStatus::Warnings => "warnings",
            OverallStatus::Clean => "clean",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            OverallStatus::Violations => "Policy Violations Detected",
            OverallStatus::Warnings => "Potential Issues Found",
            OverallStatus::Clean => "Account Appears Clean",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            OverallStatus::Violations => "❌",
            OverallStatus::Warnings => "⚠️",
            OverallStatus::Clean => "✅",
        }
    }
}
