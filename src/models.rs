use serde::{Deserialize, Serialize};

// ============ Fixed identity strings ============

/// Origin site identifier attached to every forwarded lead.
pub const LEAD_SOURCE: &str = "sakar_whizzo_website";

/// User-Agent sent on outbound webhook calls.
pub const RELAY_USER_AGENT: &str = "SakarWhizzo-LeadAPI/1.0";

// ============ User-facing messages ============

pub const REQUIRED_FIELDS_ERROR: &str = "Name and mobile are required fields";
pub const INVALID_MOBILE_ERROR: &str = "Invalid mobile number format";
pub const NOT_CONFIGURED_ERROR: &str = "Lead processing service not configured";
pub const RELAY_FAILED_ERROR: &str = "Failed to process your lead. Please try again.";
pub const INTERNAL_ERROR: &str = "Internal server error. Please try again later.";
pub const SUCCESS_MESSAGE: &str = "Your interest has been registered successfully!";
pub const NEXT_STEPS_MESSAGE: &str = "Our team will contact you within 24 hours.";

// ============ API Request/Response Models ============

/// Raw lead submission from the form. Client-authored and untrusted: every
/// field is optional on the wire and the endpoint re-validates before
/// forwarding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interested: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

/// Lead payload forwarded to the webhook: the submission plus request
/// metadata. Built per request and discarded once the forward completes.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedLead {
    #[serde(flatten)]
    pub lead: LeadSubmission,
    /// RFC 3339 UTC submission time, millisecond precision.
    pub timestamp: String,
    pub source: &'static str,
    pub user_agent: String,
    pub ip_address: String,
    /// Human-readable budget label; omitted when no budget was selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_budget: Option<String>,
}

/// Acknowledgement body from the webhook receiver. Decoded leniently: the
/// receiver may return any of these fields, or no JSON at all.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl WebhookAck {
    /// Fallback ack for receivers that respond 2xx with a non-JSON body.
    pub fn implicit_success() -> Self {
        Self {
            success: Some(true),
            message: Some("Lead processed successfully".to_string()),
            id: None,
        }
    }
}

/// Outcome returned to the form. Success responses fill `message`, `lead_id`,
/// `timestamp` and `next_steps`; failure responses fill `error` and, in
/// verbose mode, `details`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, rename = "leadId", skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, rename = "nextSteps", skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RelayResult {
    pub fn registered(lead_id: String, timestamp: String) -> Self {
        Self {
            success: true,
            message: Some(SUCCESS_MESSAGE.to_string()),
            lead_id: Some(lead_id),
            timestamp: Some(timestamp),
            next_steps: Some(NEXT_STEPS_MESSAGE.to_string()),
            error: None,
            details: None,
        }
    }
}
