use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::ApiError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    BadGateway { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn bad_gateway(message: impl Into<String>, details: Value) -> Self {
        Self::BadGateway {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::BadGateway { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        tracing::error!("Page load failed: {}", e);

        match e {
            ApiError::Network { url, reason } => AppError::bad_gateway(
                "Upstream request failed",
                json!({ "url": url, "reason": reason }),
            ),
            ApiError::MalformedResponse { value } => AppError::bad_gateway(
                "Malformed upstream response",
                json!({ "received": value }),
            ),
            ApiError::ElementParse { value, reason } => AppError::bad_gateway(
                "Unparseable upstream record",
                json!({ "received": value, "reason": reason }),
            ),
            ApiError::InvalidUrl { url, reason } => AppError::internal(
                "Invalid upstream URL",
                json!({ "url": url, "reason": reason }),
            ),
        }
    }
}
