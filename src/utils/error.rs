use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {code}")]
    Status { code: u16 },

    #[error("Serialization error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    ConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Payload,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GatewayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::Transport(_) | GatewayError::Status { .. } => ErrorCategory::Network,
            GatewayError::Payload(_) => ErrorCategory::Payload,
            GatewayError::Io(_) => ErrorCategory::Io,
            GatewayError::Config { .. }
            | GatewayError::ConfigValue { .. }
            | GatewayError::MissingConfig { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Network and payload failures degrade to fallbacks, never abort.
            GatewayError::Transport(_) | GatewayError::Status { .. } => ErrorSeverity::Medium,
            GatewayError::Payload(_) => ErrorSeverity::Medium,
            GatewayError::Io(_) => ErrorSeverity::High,
            GatewayError::Config { .. }
            | GatewayError::ConfigValue { .. }
            | GatewayError::MissingConfig { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::Transport(_) => {
                "Could not reach the wellness AI service. Check your network connection.".to_string()
            }
            GatewayError::Status { code } => {
                format!("The wellness AI service rejected the request (HTTP {code}).")
            }
            GatewayError::Payload(_) => {
                "The wellness AI service returned an unreadable response.".to_string()
            }
            GatewayError::Io(e) => format!("File operation failed: {e}"),
            GatewayError::Config { message } => format!("Configuration problem: {message}"),
            GatewayError::ConfigValue { field, reason, .. } => {
                format!("Configuration value '{field}' is invalid: {reason}")
            }
            GatewayError::MissingConfig { field } => {
                format!("Configuration value '{field}' is required but missing")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Verify the base URL and API key, then retry. Fallback answers remain available."
            }
            ErrorCategory::Payload => "Retry the request; report the issue if it persists.",
            ErrorCategory::Configuration => {
                "Fix the configuration file or command-line flags and run again."
            }
            ErrorCategory::Io => "Check file permissions and available disk space.",
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_critical() {
        let err = GatewayError::MissingConfig {
            field: "gateway.api_key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("gateway.api_key"));
    }

    #[test]
    fn status_errors_are_network_category() {
        let err = GatewayError::Status { code: 503 };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("503"));
    }
}
