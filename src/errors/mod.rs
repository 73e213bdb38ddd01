use std::error::Error as StdError;
use std::fmt;
use crate::enums::analysis_error::AnalysisError;

/// Application-level failures: everything outside the presenter's own
/// `AnalysisError` handling that can stop a command.
#[derive(Debug, Clone)]
pub enum GramcheckError {
    /// A config value is missing or out of range.
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    /// The config file itself could not be found or read.
    ConfigurationFileError {
        path: String,
        reason: String,
    },
    /// A non-interactive report ended in the failed view.
    AnalysisFailed {
        identifier: String,
        reason: String,
        recoverable: bool,
    },
    /// Export directory or report file could not be written.
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },
    /// Bad command line input.
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },
    /// Terminal I/O, socket binding and the like.
    SystemError {
        operation: String,
        reason: String,
    },
    /// Config validation reports every problem at once.
    MultipleErrors {
        errors: Vec<GramcheckError>,
        context: String,
    },
}

impl GramcheckError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(str::to_string),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(str::to_string),
        }
    }

    pub fn analysis_failed(identifier: &str, error: &AnalysisError) -> Self {
        Self::AnalysisFailed {
            identifier: identifier.to_string(),
            reason: error.to_string(),
            recoverable: error.is_retryable(),
        }
    }

    /// Whether running the same command again might succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::AnalysisFailed { recoverable, .. } => *recoverable,
            Self::ConfigurationError { .. } | Self::ValidationError { .. } => true,
            Self::MultipleErrors { errors, .. } => errors.iter().any(Self::is_recoverable),
            Self::ConfigurationFileError { .. }
            | Self::FileOperationError { .. }
            | Self::ParseError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::AnalysisFailed { .. } | Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => errors
                .iter()
                .map(Self::severity)
                .max()
                .unwrap_or(ErrorSeverity::Low),
        }
    }

    /// Follow-up advice printed under the message.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ConfigurationError { suggestion, .. } | Self::ValidationError { suggestion, .. } => suggestion.clone(),
            Self::ConfigurationFileError { .. } => Some("Check the path, file permissions and TOML syntax".to_string()),
            Self::AnalysisFailed { recoverable: true, .. } => Some("Run the report again to retry the analysis".to_string()),
            Self::FileOperationError { .. } => Some("Check output.export_dir and its permissions".to_string()),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        let message = self.to_string();
        match self.hint() {
            Some(hint) => format!("{}\n💡 {}", message, hint),
            None => message,
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for GramcheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigurationError { message, field: Some(field), .. } => {
                write!(f, "Configuration error in {}: {}", field, message)
            }
            Self::ConfigurationError { message, field: None, .. } => write!(f, "Configuration error: {}", message),
            Self::ConfigurationFileError { path, reason } => write!(f, "Cannot use config file '{}': {}", path, reason),
            Self::AnalysisFailed { identifier, reason, .. } => {
                write!(f, "Analysis of account '@{}' failed: {}", identifier, reason)
            }
            Self::FileOperationError { file_path, operation, reason } => {
                write!(f, "Could not {} '{}': {}", operation, file_path, reason)
            }
            Self::ParseError { content_type, line_number: Some(line), reason } => {
                write!(f, "Invalid {} (line {}): {}", content_type, line, reason)
            }
            Self::ParseError { content_type, line_number: None, reason } => {
                write!(f, "Invalid {}: {}", content_type, reason)
            }
            Self::ValidationError { field, value, constraint, .. } => {
                write!(f, "Invalid {} '{}': {}", field, value, constraint)
            }
            Self::SystemError { operation, reason } => write!(f, "Failed to {}: {}", operation, reason),
            Self::MultipleErrors { errors, context } => {
                writeln!(f, "{} found {} problem(s):", context, errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for GramcheckError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

pub type GramcheckResult<T> = Result<T, GramcheckError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Logs the full error and prints the user-facing message to stderr.
    pub fn handle_error(error: &GramcheckError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<std::io::Error> for GramcheckError {
    fn from(error: std::io::Error) -> Self {
        GramcheckError::system_error("perform terminal I/O", &error.to_string())
    }
}

impl From<serde_json::Error> for GramcheckError {
    fn from(error: serde_json::Error) -> Self {
        GramcheckError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for GramcheckError {
    fn from(error: toml::de::Error) -> Self {
        GramcheckError::ParseError {
            content_type: "TOML config".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_errors_take_the_highest_severity() {
        let error = GramcheckError::MultipleErrors {
            errors: vec![
                GramcheckError::config_error("must be greater than zero", Some("server.port"), None),
                GramcheckError::file_error("/tmp/x", "write", "denied"),
            ],
            context: "configuration validation".to_string(),
        };

        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(error.is_recoverable());
        assert!(error
            .user_message()
            .contains("1. Configuration error in server.port: must be greater than zero"));
    }

    #[test]
    fn analysis_failure_keeps_retry_hint() {
        let error = GramcheckError::analysis_failed("someone", &AnalysisError::Timeout { millis: 5000 });
        assert!(error.is_recoverable());
        assert_eq!(
            error.user_message(),
            "Analysis of account '@someone' failed: Analysis timed out after 5000 ms\n💡 Run the report again to retry the analysis"
        );
    }

    #[test]
    fn unknown_account_is_not_recoverable() {
        let error = GramcheckError::analysis_failed(
            "ghost",
            &AnalysisError::NotFound { identifier: "ghost".to_string() },
        );
        assert!(!error.is_recoverable());
        assert_eq!(error.hint(), None);
    }
}
