use axum::http::StatusCode;

use crate::errors::AppError;
use crate::models::{EnrichedLead, WebhookAck, RELAY_USER_AGENT};

/// Client for the external lead-management webhook (Make.com or any other
/// receiver that accepts a JSON POST).
#[derive(Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

/// What the webhook said, once it answered at all. Transport failures are a
/// separate `Err` path.
#[derive(Debug)]
pub enum ForwardOutcome {
    /// 2xx response; ack parsed from the body or synthesized when the body
    /// was not JSON.
    Delivered(WebhookAck),
    /// Non-success response; status and raw body for passthrough.
    Rejected { status: StatusCode, body: String },
}

impl WebhookClient {
    /// Creates a new `WebhookClient`.
    ///
    /// No request timeout is set: the webhook contract defines none, so the
    /// transport default applies.
    pub fn new(url: String, api_key: Option<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(RELAY_USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal {
                details: Some(format!("Failed to create webhook client: {}", e)),
            })?;

        Ok(Self {
            client,
            url,
            api_key,
        })
    }

    /// Forwards an enriched lead to the webhook. Single attempt, no retry:
    /// a failed delivery is reported to the caller, who may resubmit.
    pub async fn forward(&self, lead: &EnrichedLead) -> Result<ForwardOutcome, AppError> {
        tracing::info!("Forwarding lead to webhook: {}", self.url);

        let mut request = self.client.post(&self.url).json(lead);
        if let Some(ref key) = self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Lead webhook request failed: {}", e);
            AppError::Internal {
                details: Some(e.to_string()),
            }
        })?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Lead webhook error ({}): {}", status, body);
            return Ok(ForwardOutcome::Rejected { status, body });
        }

        // Two-step decode: read the body, then try JSON. Some receivers
        // answer 200 with plain text or an empty body.
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read webhook response: {}", e);
            AppError::Internal {
                details: Some(e.to_string()),
            }
        })?;

        let ack = serde_json::from_slice::<WebhookAck>(&body).unwrap_or_else(|_| {
            tracing::debug!("Webhook response was not JSON; assuming success");
            WebhookAck::implicit_success()
        });

        tracing::info!("Lead forwarded successfully (upstream id: {:?})", ack.id);
        Ok(ForwardOutcome::Delivered(ack))
    }
}
