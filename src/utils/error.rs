use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("API response contained no text")]
    EmptyResponse,

    #[error("Error processing the AI-generated article.")]
    MalformedArticle,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Api(_) => ErrorCategory::Network,
            AppError::ApiStatus { .. } | AppError::EmptyResponse => ErrorCategory::Api,
            AppError::MalformedArticle
            | AppError::Serialization(_)
            | AppError::ValidationError { .. } => ErrorCategory::Data,
            AppError::TomlError(_)
            | AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::Io(_) | AppError::Clipboard { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Clipboard { .. } => ErrorSeverity::Low,
            AppError::Api(_) | AppError::EmptyResponse | AppError::MalformedArticle => {
                ErrorSeverity::Medium
            }
            AppError::ApiStatus { status, .. } if *status >= 500 || *status == 429 => {
                ErrorSeverity::Medium
            }
            AppError::ApiStatus { .. }
            | AppError::Serialization(_)
            | AppError::ValidationError { .. }
            | AppError::TomlError(_)
            | AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::MissingConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AppError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Api(e) if e.is_timeout() => {
                "The AI service took too long to answer.".to_string()
            }
            AppError::Api(_) => "Could not reach the AI service.".to_string(),
            AppError::ApiStatus { status, .. } => {
                format!("The AI service rejected the request (HTTP {}).", status)
            }
            AppError::EmptyResponse => "The AI service returned an empty answer.".to_string(),
            AppError::MalformedArticle => self.to_string(),
            AppError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting {}: {}", field, reason)
            }
            AppError::Clipboard { .. } => "Could not access the clipboard.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again.",
            ErrorCategory::Api => match self {
                AppError::ApiStatus { status: 401, .. } | AppError::ApiStatus { status: 403, .. } => {
                    "Check that GEMINI_API_KEY holds a valid key."
                }
                AppError::ApiStatus { status: 429, .. } => {
                    "The API quota was exceeded; wait a moment before retrying."
                }
                _ => "Try the same step again; AI answers vary between calls.",
            },
            ErrorCategory::Data => "Try the same step again; AI answers vary between calls.",
            ErrorCategory::Configuration => {
                "Review the command-line options and the TOML configuration file."
            }
            ErrorCategory::System => "Check file permissions and available disk space.",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_article_has_fixed_message() {
        let err = AppError::MalformedArticle;
        assert_eq!(err.to_string(), "Error processing the AI-generated article.");
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.user_friendly_message(), err.to_string());
    }

    #[test]
    fn test_api_status_severity_depends_on_code() {
        let transient = AppError::ApiStatus {
            status: 503,
            body: String::new(),
        };
        let rejected = AppError::ApiStatus {
            status: 400,
            body: String::new(),
        };
        assert_eq!(transient.severity(), ErrorSeverity::Medium);
        assert_eq!(rejected.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_auth_failure_suggests_api_key() {
        let err = AppError::ApiStatus {
            status: 403,
            body: "PERMISSION_DENIED".to_string(),
        };
        assert!(err.recovery_suggestion().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_config_errors_are_configuration_category() {
        let err = AppError::MissingConfigError {
            field: "gemini.api_key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("gemini.api_key"));
    }
}
