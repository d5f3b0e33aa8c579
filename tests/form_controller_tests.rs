/// Form controller tests driven through a scripted gateway, so the full
/// submit lifecycle runs without a server.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use sakar_lead_api::form::{
    Field, FormController, FormPhase, GatewayError, LeadGateway, SubmitError,
};
use sakar_lead_api::models::{LeadSubmission, RelayResult};

/// Gateway returning a canned outcome and counting calls.
struct FakeGateway {
    calls: Arc<AtomicUsize>,
    outcome: Result<RelayResult, GatewayError>,
}

impl FakeGateway {
    fn succeeding(message: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = Self {
            calls: calls.clone(),
            outcome: Ok(RelayResult {
                success: true,
                message: Some(message.to_string()),
                lead_id: Some("wh_1".to_string()),
                ..Default::default()
            }),
        };
        (gateway, calls)
    }

    fn failing(message: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let gateway = Self {
            calls: calls.clone(),
            outcome: Err(GatewayError {
                message: message.to_string(),
            }),
        };
        (gateway, calls)
    }
}

#[async_trait]
impl LeadGateway for FakeGateway {
    async fn submit(&self, _lead: &LeadSubmission) -> Result<RelayResult, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Gateway whose submission never resolves, for abandoned-request tests.
struct PendingGateway;

#[async_trait]
impl LeadGateway for PendingGateway {
    async fn submit(&self, _lead: &LeadSubmission) -> Result<RelayResult, GatewayError> {
        std::future::pending().await
    }
}

fn fill_valid<G: LeadGateway>(controller: &mut FormController<G>) {
    controller.set_field(Field::Name, "Asha");
    controller.set_field(Field::Mobile, "9876543210");
    controller.set_field(Field::Interested, "yes");
    controller.set_field(Field::Budget, "flexible");
}

#[test]
fn test_validate_reports_every_failing_field() {
    let (gateway, _) = FakeGateway::succeeding("ok");
    let controller = FormController::new(gateway);

    let errors = controller.validate();
    assert_eq!(errors.name.as_deref(), Some("Name is required"));
    assert_eq!(errors.mobile.as_deref(), Some("Mobile number is required"));
    assert_eq!(errors.interested.as_deref(), Some("This field is required"));
    assert_eq!(
        errors.budget.as_deref(),
        Some("Budget selection is required")
    );
}

#[test]
fn test_validate_malformed_values() {
    let (gateway, _) = FakeGateway::succeeding("ok");
    let mut controller = FormController::new(gateway);
    controller.set_field(Field::Name, "Asha");
    controller.set_field(Field::Mobile, "12345");
    controller.set_field(Field::Interested, "maybe");
    controller.set_field(Field::Budget, "2cr-plus");

    let errors = controller.validate();
    assert!(errors.name.is_none());
    assert_eq!(
        errors.mobile.as_deref(),
        Some("Please enter a valid mobile number")
    );
    assert_eq!(errors.interested.as_deref(), Some("Please select an option"));
    assert_eq!(
        errors.budget.as_deref(),
        Some("Please select a budget range")
    );
}

#[tokio::test]
async fn test_invalid_form_never_reaches_gateway() {
    let (gateway, calls) = FakeGateway::succeeding("ok");
    let mut controller = FormController::new(gateway);
    controller.set_field(Field::Name, "Asha");

    let result = controller.submit().await;
    match result {
        Err(SubmitError::Invalid(errors)) => {
            assert!(errors.mobile.is_some());
            assert!(errors.interested.is_some());
            assert!(errors.budget.is_some());
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(controller.phase(), FormPhase::Idle);
}

#[tokio::test]
async fn test_successful_submit_resets_fields() {
    let (gateway, calls) = FakeGateway::succeeding("Thank you!");
    let mut controller = FormController::new(gateway);
    fill_valid(&mut controller);

    let result = controller.submit().await.unwrap();
    assert!(result.success);
    assert_eq!(result.lead_id.as_deref(), Some("wh_1"));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.phase(), FormPhase::Success);
    assert_eq!(controller.message(), Some("Thank you!"));
    // All field state cleared for the next visitor
    assert!(controller.fields().name.is_empty());
    assert!(controller.fields().mobile.is_empty());
    assert!(controller.fields().interested.is_empty());
    assert!(controller.fields().budget.is_empty());
}

#[tokio::test]
async fn test_failed_submit_keeps_fields_for_retry() {
    let (gateway, calls) = FakeGateway::failing("Something went wrong. Please try again.");
    let mut controller = FormController::new(gateway);
    fill_valid(&mut controller);

    let result = controller.submit().await.unwrap();
    assert!(!result.success);
    assert_eq!(
        result.error.as_deref(),
        Some("Something went wrong. Please try again.")
    );

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.phase(), FormPhase::Error);
    assert_eq!(
        controller.message(),
        Some("Something went wrong. Please try again.")
    );
    // Fields survive so the visitor can resubmit
    assert_eq!(controller.fields().name, "Asha");
    assert_eq!(controller.fields().mobile, "9876543210");
}

#[tokio::test]
async fn test_next_edit_clears_result_banner() {
    let (gateway, _) = FakeGateway::succeeding("Registered");
    let mut controller = FormController::new(gateway);
    fill_valid(&mut controller);
    controller.submit().await.unwrap();
    assert_eq!(controller.phase(), FormPhase::Success);
    assert!(controller.message().is_some());

    controller.set_field(Field::Name, "Ravi");
    assert_eq!(controller.phase(), FormPhase::Idle);
    assert!(controller.message().is_none());
}

#[tokio::test]
async fn test_error_banner_persists_until_edit() {
    let (gateway, _) = FakeGateway::failing("relay down");
    let mut controller = FormController::new(gateway);
    fill_valid(&mut controller);
    controller.submit().await.unwrap();

    // Message stays until the next interaction, it is not cleared on its own
    assert_eq!(controller.phase(), FormPhase::Error);
    assert_eq!(controller.message(), Some("relay down"));

    controller.set_field(Field::Mobile, "9123456789");
    assert_eq!(controller.phase(), FormPhase::Idle);
    assert!(controller.message().is_none());
}

#[tokio::test]
async fn test_padded_mobile_rejected_like_the_endpoint() {
    let (gateway, calls) = FakeGateway::succeeding("ok");
    let mut controller = FormController::new(gateway);
    fill_valid(&mut controller);
    // The endpoint validates the raw value; a padded number must fail
    // client-side too instead of bouncing off the server with a 400.
    controller.set_field(Field::Mobile, " 9876543210");

    let errors = controller.validate();
    assert_eq!(
        errors.mobile.as_deref(),
        Some("Please enter a valid mobile number")
    );

    let result = controller.submit().await;
    assert!(matches!(result, Err(SubmitError::Invalid(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_abandoned_submission_blocks_resubmit() {
    let mut controller = FormController::new(PendingGateway);
    fill_valid(&mut controller);

    // Abandon the first submission mid-flight by dropping its future.
    let abandoned =
        tokio::time::timeout(std::time::Duration::from_millis(20), controller.submit()).await;
    assert!(abandoned.is_err());
    assert_eq!(controller.phase(), FormPhase::Submitting);

    // No cancellation path exists once a submission is accepted, so the
    // controller keeps refusing re-entry.
    let result = controller.submit().await;
    assert!(matches!(result, Err(SubmitError::InFlight)));
}

#[tokio::test]
async fn test_resubmit_after_error_calls_gateway_again() {
    let (gateway, calls) = FakeGateway::failing("relay down");
    let mut controller = FormController::new(gateway);
    fill_valid(&mut controller);

    controller.submit().await.unwrap();
    controller.submit().await.unwrap();

    // Each accepted submission makes exactly one outbound call
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
