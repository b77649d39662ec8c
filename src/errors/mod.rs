use thiserror::Error;

#[derive(Debug, Error)]
pub enum TesterError {
    // Configuration errors
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },
    #[error("Webhook URL not configured in '{path}'")]
    NotConfigured {
        path: String,
    },

    // Validation errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },

    // Network errors
    #[error("Request to {url} timed out")]
    Timeout {
        url: String,
    },
    #[error("Connection to {url} failed: {reason}")]
    ConnectionError {
        url: String,
        reason: String,
    },
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Console errors
    #[error("Could not write report to the console: {reason}")]
    ConsoleError {
        reason: String,
    },

    // Serialization errors
    #[error("Serialization error ({content_type}): {reason}")]
    SerializationError {
        content_type: String,
        reason: String,
    },
}

impl TesterError {
    pub fn file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_configured(path: &str) -> Self {
        Self::NotConfigured {
            path: path.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Transport failures that the tester reports as their own category.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::ConnectionError { .. } | Self::NetworkError { .. }
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationFileError { reason, .. } => {
                format!("❌ Error reading webhook URL: {}", reason)
            }
            Self::NotConfigured { .. } => {
                "❌ Webhook URL not configured!\n   Run the webhook configuration script first.".to_string()
            }
            Self::ValidationError { .. } => {
                "❌ Invalid URL format. Please provide a valid HTTP/HTTPS URL.".to_string()
            }
            Self::Timeout { .. } => {
                "❌ Request timed out\n   Check if your n8n instance is accessible.".to_string()
            }
            Self::ConnectionError { .. } => {
                "❌ Connection error\n   Check if your n8n instance is running and accessible.".to_string()
            }
            Self::NetworkError { reason, .. } => format!("❌ Error: {}", reason),
            Self::ConsoleError { reason } => format!("❌ Could not write to the console: {}", reason),
            Self::SerializationError { content_type, reason } => {
                format!("❌ Error: invalid {}: {}", content_type, reason)
            }
        }
    }
}

/// Result type alias for tester operations
pub type TesterResult<T> = Result<T, TesterError>;

/// File access maps its I/O errors explicitly; what reaches `?` is console output.
impl From<std::io::Error> for TesterError {
    fn from(error: std::io::Error) -> Self {
        TesterError::ConsoleError {
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for TesterError {
    fn from(error: serde_json::Error) -> Self {
        TesterError::SerializationError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for TesterError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string()).unwrap_or_default();

        if error.is_timeout() {
            TesterError::Timeout { url }
        } else if error.is_connect() {
            TesterError::ConnectionError {
                url,
                reason: error.to_string(),
            }
        } else {
            TesterError::NetworkError {
                operation: "HTTP request".to_string(),
                url: error.url().map(|u| u.to_string()),
                status_code: error.status().map(|s| s.as_u16()),
                reason: error.to_string(),
            }
        }
    }
}
