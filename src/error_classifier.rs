use crate::api::error::ApiError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Log level an API failure is reported at.
    pub fn classify_api_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // The record is gone already; usually a stale list
            ApiError::Http { status: 404, .. } => LogLevel::Warn,

            // Temporary server issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: auth and rejected payloads
            ApiError::Http { status, .. } if *status == 401 || *status == 403 => LogLevel::Error,
            ApiError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,

            // Malformed responses
            ApiError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
