use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::models::{INTERNAL_ERROR, NOT_CONFIGURED_ERROR, RELAY_FAILED_ERROR};

/// Application-specific error types.
///
/// Every variant maps to a RelayResult-shaped `{error, details?}` body, so no
/// failure path leaks raw payloads or configuration to the caller.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Client input error (missing field, malformed value).
    BadRequest(String),
    /// Forwarding target missing from configuration. Deployment fault, not a
    /// client fault; the response never names the missing setting.
    NotConfigured,
    /// Webhook answered with a non-success status. The status is passed
    /// through to the original caller.
    Upstream {
        status: StatusCode,
        details: Option<String>,
    },
    /// Unexpected failure (transport fault, serialization error).
    Internal { details: Option<String> },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotConfigured => write!(f, "Lead webhook not configured"),
            AppError::Upstream { status, .. } => write!(f, "Upstream error: {}", status),
            AppError::Internal { .. } => write!(f, "Internal error"),
        }
    }
}

impl AppError {
    /// Strip operator-facing detail unless diagnostics are enabled. Raw
    /// detail is logged at the point of failure, never returned by default.
    pub fn redact(self, verbose: bool) -> Self {
        match self {
            AppError::Upstream { status, details } => AppError::Upstream {
                status,
                details: details.filter(|_| verbose),
            },
            AppError::Internal { details } => AppError::Internal {
                details: details.filter(|_| verbose),
            },
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    fn into_response(self) -> Response {
        let (status, error_message, details) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotConfigured => {
                tracing::error!("LEAD_WEBHOOK_URL not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    NOT_CONFIGURED_ERROR.to_string(),
                    None,
                )
            }
            AppError::Upstream { status, details } => {
                (status, RELAY_FAILED_ERROR.to_string(), details)
            }
            AppError::Internal { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR.to_string(),
                details,
            ),
        };

        let mut body = json!({
            "error": error_message,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}
