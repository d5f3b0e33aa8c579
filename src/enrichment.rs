use axum::http::HeaderMap;
use chrono::{SecondsFormat, Utc};

use crate::models::{EnrichedLead, LeadSubmission, LEAD_SOURCE};
use crate::validation::format_budget;

/// Build the webhook payload from a validated submission and the request
/// headers. Pure per-request derivation; nothing is stored.
pub fn enrich(lead: LeadSubmission, headers: &HeaderMap) -> EnrichedLead {
    let formatted_budget = lead.budget.as_deref().map(format_budget);

    EnrichedLead {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        source: LEAD_SOURCE,
        user_agent: user_agent(headers),
        ip_address: client_ip(headers),
        formatted_budget,
        lead,
    }
}

/// Best-effort originating address from proxy headers.
pub fn client_ip(headers: &HeaderMap) -> String {
    header_value(headers, "x-forwarded-for")
        .or_else(|| header_value(headers, "x-real-ip"))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Declared client identity, or the `"unknown"` sentinel.
pub fn user_agent(headers: &HeaderMap) -> String {
    header_value(headers, "user-agent").unwrap_or_else(|| "unknown".to_string())
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}
