//! Intake form controller: field state, client-side validation, and the
//! submit lifecycle. The rendering layer owns markup and animation; this
//! module owns everything with control flow.

use async_trait::async_trait;
use std::fmt;

use crate::models::{LeadSubmission, RelayResult};
use crate::validation::{is_valid_mobile, BUDGET_OPTIONS, INTEREST_OPTIONS};

/// Shown when the relay call fails without a usable error message.
pub const GENERIC_SUBMIT_ERROR: &str = "Something went wrong. Please try again.";

/// Outbound seam to the relay endpoint. Kept as a trait so tests drive the
/// controller with a scripted gateway instead of a live server.
#[async_trait]
pub trait LeadGateway {
    async fn submit(&self, lead: &LeadSubmission) -> Result<RelayResult, GatewayError>;
}

/// Failure reported by a gateway; `message` is what the form displays.
#[derive(Debug, Clone)]
pub struct GatewayError {
    pub message: String,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Gateway posting submissions to the relay endpoint over HTTP.
pub struct HttpLeadGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLeadGateway {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl LeadGateway for HttpLeadGateway {
    async fn submit(&self, lead: &LeadSubmission) -> Result<RelayResult, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Lead submission failed: {}", e);
                GatewayError {
                    message: GENERIC_SUBMIT_ERROR.to_string(),
                }
            })?;

        if response.status().is_success() {
            response.json::<RelayResult>().await.map_err(|e| {
                tracing::warn!("Unreadable relay response: {}", e);
                GatewayError {
                    message: GENERIC_SUBMIT_ERROR.to_string(),
                }
            })
        } else {
            let status = response.status();
            let body = response.json::<RelayResult>().await.unwrap_or_default();
            tracing::warn!("Lead submission rejected ({})", status);
            Err(GatewayError {
                message: body
                    .error
                    .unwrap_or_else(|| GENERIC_SUBMIT_ERROR.to_string()),
            })
        }
    }
}

/// The four fields the form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub mobile: String,
    pub interested: String,
    pub budget: String,
}

impl FormFields {
    pub fn to_submission(&self) -> LeadSubmission {
        LeadSubmission {
            name: Some(self.name.clone()),
            mobile: Some(self.mobile.clone()),
            interested: Some(self.interested.clone()),
            budget: Some(self.budget.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Mobile,
    Interested,
    Budget,
}

/// Per-field validation messages. All failing fields are reported, not just
/// the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub interested: Option<String>,
    pub budget: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mobile.is_none()
            && self.interested.is_none()
            && self.budget.is_none()
    }
}

/// Apply the same constraints the endpoint enforces, plus enum membership
/// for the select fields.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if fields.mobile.trim().is_empty() {
        errors.mobile = Some("Mobile number is required".to_string());
    } else if !is_valid_mobile(&fields.mobile) {
        // Checked exactly as submitted: the endpoint validates the raw
        // value, so padding must fail here too.
        errors.mobile = Some("Please enter a valid mobile number".to_string());
    }

    if fields.interested.is_empty() {
        errors.interested = Some("This field is required".to_string());
    } else if !INTEREST_OPTIONS.contains(&fields.interested.as_str()) {
        errors.interested = Some("Please select an option".to_string());
    }

    if fields.budget.is_empty() {
        errors.budget = Some("Budget selection is required".to_string());
    } else if !BUDGET_OPTIONS.contains(&fields.budget.as_str()) {
        errors.budget = Some("Please select a budget range".to_string());
    }

    errors
}

/// Submit lifecycle states. The message carried by `Success`/`Error` stays
/// visible until the next field edit returns the form to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// Precondition failures for `submit`; the outbound call is never made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A submission is already outstanding.
    InFlight,
    /// Validation failed; carries every failing field.
    Invalid(FieldErrors),
}

/// Owns the form state and drives one submission at a time through the
/// gateway.
pub struct FormController<G> {
    gateway: G,
    fields: FormFields,
    phase: FormPhase,
    message: Option<String>,
}

impl<G: LeadGateway> FormController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            fields: FormFields::default(),
            phase: FormPhase::Idle,
            message: None,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Record a field edit. The first edit after a completed submission
    /// clears the result banner and returns the form to `Idle`.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if matches!(self.phase, FormPhase::Success | FormPhase::Error) {
            self.message = None;
            self.phase = FormPhase::Idle;
        }

        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Mobile => self.fields.mobile = value,
            Field::Interested => self.fields.interested = value,
            Field::Budget => self.fields.budget = value,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validate(&self.fields)
    }

    /// Validate and submit. Makes exactly one outbound call per accepted
    /// submission and refuses to re-enter while one is outstanding: a
    /// submission abandoned mid-flight (the future dropped at the await)
    /// leaves the controller in `Submitting`, and later calls report
    /// `InFlight` — there is no cancellation once a submission is accepted.
    /// On success all field state resets; on failure the fields are kept so
    /// the visitor can retry.
    pub async fn submit(&mut self) -> Result<RelayResult, SubmitError> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitError::InFlight);
        }

        self.phase = FormPhase::Validating;
        let errors = self.validate();
        if !errors.is_empty() {
            self.phase = FormPhase::Idle;
            return Err(SubmitError::Invalid(errors));
        }

        self.phase = FormPhase::Submitting;
        let submission = self.fields.to_submission();

        match self.gateway.submit(&submission).await {
            Ok(result) => {
                self.message = result.message.clone();
                self.phase = FormPhase::Success;
                self.fields = FormFields::default();
                Ok(result)
            }
            Err(e) => {
                self.message = Some(e.message.clone());
                self.phase = FormPhase::Error;
                Ok(RelayResult {
                    success: false,
                    error: Some(e.message),
                    ..Default::default()
                })
            }
        }
    }
}
