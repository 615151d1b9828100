//! Error handling for the erudio HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

const NULL_OBJECT_MESSAGE: &str = "It is not allowed to persist a null object!";

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String, code: String },

    #[error("{message}")]
    RequiredObjectIsNull { message: String, code: String },

    #[error("unsupported operation: {message}")]
    UnsupportedOperation { message: String, code: String },

    #[error("bad request: {message}")]
    BadRequest { message: String, code: String },

    #[error("unsupported media type: {message}")]
    UnsupportedMediaType { message: String, code: String },

    #[error("file not found: {message}")]
    FileNotFound { message: String, code: String },

    #[error("file storage: {message}")]
    FileStorage {
        message: String,
        code: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code: "not_found".to_string(),
        }
    }

    /// A create or update was called without a payload
    pub fn required_object_is_null() -> Self {
        Self::RequiredObjectIsNull {
            message: NULL_OBJECT_MESSAGE.to_string(),
            code: "required_object_is_null".to_string(),
        }
    }

    pub fn unsupported_operation(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
            code: "unsupported_operation".to_string(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            code: "bad_request".to_string(),
        }
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            message: message.into(),
            code: "unsupported_media_type".to_string(),
        }
    }

    pub fn file_not_found(message: impl Into<String>) -> Self {
        Self::FileNotFound {
            message: message.into(),
            code: "file_not_found".to_string(),
        }
    }

    /// I/O failure while reading or writing uploaded files
    pub fn file_storage(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileStorage {
            message: message.into(),
            code: "file_storage_error".to_string(),
            source: Some(source),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::FileNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RequiredObjectIsNull { .. }
            | AppError::UnsupportedOperation { .. }
            | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::FileStorage { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        let timestamp = OffsetDateTime::now_utc().to_string();
        let status = self.status();

        let (error_code, message) = match self {
            AppError::NotFound { message, code }
            | AppError::RequiredObjectIsNull { message, code }
            | AppError::UnsupportedOperation { message, code }
            | AppError::BadRequest { message, code }
            | AppError::UnsupportedMediaType { message, code }
            | AppError::FileNotFound { message, code } => (code, message),
            AppError::FileStorage {
                message,
                code,
                source,
            } => {
                if let Some(source) = source {
                    tracing::error!(error_id = %error_id, error = %source, "file storage failure");
                }
                (code, message)
            }
            AppError::Internal(e) => ("internal_error".to_string(), format!("{:#}", e)),
        };

        tracing::error!(
            error_id = %error_id,
            error_code = %error_code,
            status_code = %status.as_u16(),
            "Request error"
        );

        // Release builds hide internal error details
        let message = if cfg!(not(debug_assertions)) && status == StatusCode::INTERNAL_SERVER_ERROR
        {
            "An internal server error occurred".to_string()
        } else {
            message
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message,
                "details": [],
                "trace_id": error_id.to_string(),
                "timestamp": timestamp
            }
        });

        (status, Json(error_response)).into_response()
    }
}
