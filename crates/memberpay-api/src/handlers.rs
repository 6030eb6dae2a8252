//! # Request Handlers
//!
//! Axum request handlers for the payment API. Every reply, success or
//! failure, is the JSON `ResponseEnvelope`; gates run in a fixed order
//! (session, verb, configuration, validation) so clients always see
//! the earliest applicable failure. Provider failures surface as an
//! endpoint-specific generic message with the detail kept in server
//! logs.

use crate::session::CurrentAccount;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use memberpay_core::{classify_confirmation, PaymentError, PaymentRequest, ResponseEnvelope};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{error, info, instrument};

/// Description used when a setup request does not supply one
const DEFAULT_SETUP_DESCRIPTION: &str = "Payment method setup";

// =============================================================================
// Request Types
// =============================================================================

/// Create-setup-intent request body
#[derive(Debug, Default, Deserialize)]
pub struct SetupIntentBody {
    /// Free-text label attached to the setup intent as metadata
    #[serde(default)]
    pub description: Option<String>,
}

/// Process-payment request body
#[derive(Debug, Default, Deserialize)]
pub struct ProcessPaymentBody {
    #[serde(default)]
    pub payment_method_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub return_url: Option<String>,
}

/// Status plus envelope, the failure half of every handler result
pub type EnvelopeReply = (StatusCode, Json<ResponseEnvelope>);

/// Parse a JSON body, treating malformed or empty input as an empty
/// body. Field checks happen during validation, so a garbled payload
/// reports missing fields rather than a parse error.
fn lenient_json<T: DeserializeOwned + Default>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap_or_default()
}

/// Reply with an error's own status and wire message. Only for
/// client-safe errors; 500-class errors go through `failure_reply`
/// with a generic message instead.
fn payment_error_response(err: &PaymentError) -> EnvelopeReply {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ResponseEnvelope::failure(err.to_string())))
}

fn failure_reply(status: StatusCode, message: &str) -> EnvelopeReply {
    (status, Json(ResponseEnvelope::failure(message)))
}

/// Configuration gate: 503 before validation or any provider call
fn require_configured(state: &AppState) -> Result<(), EnvelopeReply> {
    if state.gateway.is_configured() {
        Ok(())
    } else {
        Err(payment_error_response(&PaymentError::NotConfigured))
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "memberpay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /api/v2/payments/config
///
/// Hands the frontend the publishable key it needs to tokenize cards.
pub async fn payment_config(
    State(state): State<AppState>,
    _account: CurrentAccount,
) -> Result<Json<ResponseEnvelope>, EnvelopeReply> {
    require_configured(&state)?;

    // The trait makes no type-level promise that a configured gateway
    // has a non-empty key, so the publishable key gets its own check.
    let publishable_key = state.gateway.publishable_key();
    if publishable_key.is_empty() {
        error!("Payment config error: publishable key empty on a configured gateway");
        return Err(failure_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Configuration error",
        ));
    }

    Ok(Json(ResponseEnvelope::ok(serde_json::json!({
        "stripe_publishable_key": publishable_key,
    }))))
}

/// POST /api/v2/payments/create-setup-intent
///
/// Creates a setup intent so the client can save a payment method for
/// off-session use. The body is optional; a missing description falls
/// back to a fixed label.
#[instrument(skip(state, account, body), fields(account_id = account.0))]
pub async fn create_setup_intent(
    State(state): State<AppState>,
    account: CurrentAccount,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, EnvelopeReply> {
    require_configured(&state)?;

    let input: SetupIntentBody = lenient_json(&body);
    let description = input
        .description
        .unwrap_or_else(|| DEFAULT_SETUP_DESCRIPTION.to_string());

    let setup_intent = state
        .gateway
        .create_setup_intent(account.0, &description)
        .await
        .map_err(|e| {
            error!("Setup Intent creation error: {}", e);
            failure_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Setup Intent creation failed",
            )
        })?;

    Ok(Json(ResponseEnvelope::ok(serde_json::json!({
        "client_secret": setup_intent.client_secret,
        "setup_intent_id": setup_intent.id,
        "description": description,
    }))))
}

/// POST /api/v2/payments/process-payment
///
/// Validates the charge request, runs one create-and-confirm call
/// against the gateway, and classifies the outcome. The three
/// confirmation outcomes (succeeded, requires action, failed) are all
/// 200 replies; only gates and provider failures use error statuses.
#[instrument(skip(state, account, body), fields(account_id = account.0))]
pub async fn process_payment(
    State(state): State<AppState>,
    account: CurrentAccount,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, EnvelopeReply> {
    require_configured(&state)?;

    let input: ProcessPaymentBody = lenient_json(&body);
    let request = PaymentRequest::from_parts(
        input.payment_method_id,
        input.amount,
        input.currency,
        input.description,
        input.return_url,
    )
    .map_err(|e| payment_error_response(&e))?;

    let intent = state
        .gateway
        .confirm_payment(&request, account.0)
        .await
        .map_err(|e| {
            error!("Payment processing error: {}", e);
            failure_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Payment processing failed",
            )
        })?;

    info!(
        "Payment intent {} confirmed with status {}",
        intent.id, intent.status
    );

    Ok(Json(classify_confirmation(&intent, &request)))
}

/// Fallback for payment routes hit with an unsupported verb.
///
/// Takes the session extractor so the auth gate still runs first: an
/// unauthenticated request with the wrong verb gets 401, not 405.
pub async fn method_not_allowed(_account: CurrentAccount) -> EnvelopeReply {
    payment_error_response(&PaymentError::MethodNotAllowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_error_response_statuses() {
        let (status, Json(envelope)) = payment_error_response(&PaymentError::AuthRequired);
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(envelope.message.as_deref(), Some("Authentication required"));
        assert!(!envelope.success);

        let (status, Json(envelope)) = payment_error_response(&PaymentError::MethodNotAllowed);
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(envelope.message.as_deref(), Some("Method not allowed"));

        let (status, Json(envelope)) = payment_error_response(&PaymentError::NotConfigured);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            envelope.message.as_deref(),
            Some("Payment system not configured")
        );
    }

    #[test]
    fn test_lenient_json_tolerates_garbage() {
        let body: ProcessPaymentBody = lenient_json(&Bytes::from_static(b"{not json"));
        assert!(body.payment_method_id.is_none());
        assert!(body.amount.is_none());

        let body: ProcessPaymentBody = lenient_json(&Bytes::new());
        assert!(body.payment_method_id.is_none());

        let body: SetupIntentBody = lenient_json(&Bytes::from_static(b"[1, 2, 3]"));
        assert!(body.description.is_none());
    }

    #[test]
    fn test_lenient_json_parses_valid_bodies() {
        let body: ProcessPaymentBody = lenient_json(&Bytes::from_static(
            br#"{"payment_method_id": "pm_123", "amount": 25, "unknown_field": true}"#,
        ));
        assert_eq!(body.payment_method_id.as_deref(), Some("pm_123"));
        assert_eq!(body.amount, Some(25.0));
        assert!(body.currency.is_none());

        let body: SetupIntentBody =
            lenient_json(&Bytes::from_static(br#"{"description": "Card on file"}"#));
        assert_eq!(body.description.as_deref(), Some("Card on file"));
    }
}
