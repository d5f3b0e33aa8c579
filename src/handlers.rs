use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::config::Config;
use crate::enrichment::enrich;
use crate::errors::AppError;
use crate::models::{
    LeadSubmission, RelayResult, INVALID_MOBILE_ERROR, REQUIRED_FIELDS_ERROR,
};
use crate::validation::is_valid_mobile;
use crate::webhook_client::{ForwardOutcome, WebhookClient};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the lead-management webhook (None until configured).
    pub webhook: Option<WebhookClient>,
}

/// Builds the API router. Middleware layers are attached by the binary.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lead", get(lead_status).post(submit_lead))
        .with_state(state)
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "sakar-lead-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Service identity for `GET /api/lead`. Read-only, no validation or
/// forwarding; always 200.
pub async fn lead_status() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "Sakar Whizzo Lead API",
            "status": "active",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
            "endpoints": {
                "submit": "POST /api/lead"
            }
        })),
    )
}

/// Lead relay endpoint: the trust boundary of the system.
///
/// Re-validates the submission (never trusts the client), enriches it with
/// request metadata, forwards it to the configured webhook, and normalizes
/// the outcome into a `RelayResult`. Stateless per request; concurrent
/// submissions are independent.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<RelayResult>), AppError> {
    // A body that is not a JSON object cannot carry the required fields, so
    // malformed input gets the same answer as plain omission.
    let lead = match payload {
        Ok(Json(lead)) => lead,
        Err(rejection) => {
            tracing::warn!("Rejected malformed lead payload: {}", rejection);
            return Err(AppError::BadRequest(REQUIRED_FIELDS_ERROR.to_string()));
        }
    };

    // Required-field check runs before the format check: omission and
    // malformed value get distinct messages.
    let has_name = lead.name.as_deref().is_some_and(|n| !n.trim().is_empty());
    let has_mobile = lead.mobile.as_deref().is_some_and(|m| !m.trim().is_empty());
    if !has_name || !has_mobile {
        return Err(AppError::BadRequest(REQUIRED_FIELDS_ERROR.to_string()));
    }

    let mobile = lead.mobile.as_deref().unwrap_or_default();
    if !is_valid_mobile(mobile) {
        return Err(AppError::BadRequest(INVALID_MOBILE_ERROR.to_string()));
    }

    let webhook = state.webhook.as_ref().ok_or(AppError::NotConfigured)?;

    let enriched = enrich(lead, &headers);
    tracing::info!(
        "Processing lead: source={}, ip={}",
        enriched.source,
        enriched.ip_address
    );

    let verbose = state.config.verbose_errors;
    match webhook
        .forward(&enriched)
        .await
        .map_err(|e| e.redact(verbose))?
    {
        ForwardOutcome::Rejected { status, body } => Err(AppError::Upstream {
            status,
            details: Some(body),
        }
        .redact(verbose)),
        ForwardOutcome::Delivered(ack) => {
            // Fall back to a locally generated token when the receiver does
            // not echo an id back.
            let lead_id = ack
                .id
                .unwrap_or_else(|| format!("lead_{}", Utc::now().timestamp_millis()));
            tracing::info!("Lead processed successfully: {}", lead_id);

            Ok((
                StatusCode::OK,
                Json(RelayResult::registered(lead_id, enriched.timestamp)),
            ))
        }
    }
}
