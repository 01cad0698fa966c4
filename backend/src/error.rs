//! Error handling for the Farmer Advisory Platform
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Crop analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation {
                field,
                message,
                message_hi,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("अमान्य इनपुट: {}", msg),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_hi: format!("{} नहीं मिला", resource),
                    field: None,
                },
            ),
            AppError::AnalysisFailed(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "ANALYSIS_FAILED".to_string(),
                    message_en: format!("Failed to analyze image: {}", msg),
                    message_hi: "छवि का विश्लेषण विफल रहा। कृपया बाद में पुनः प्रयास करें।"
                        .to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_hi: "कॉन्फ़िगरेशन में त्रुटि हुई।".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: "आंतरिक सर्वर त्रुटि हुई।".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (
                AppError::Validation {
                    field: "rating".to_string(),
                    message: "out of range".to_string(),
                    message_hi: "सीमा से बाहर".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::ValidationError("bad input".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound("Advice session".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::AnalysisFailed("model unreachable".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Configuration("missing key".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal("oops".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
