//! # Confirmation Classifier
//!
//! Maps a confirmed payment intent to one of three client outcomes:
//! completed, needs a follow-up authentication step, or failed. All
//! three are ordinary 200 replies; a declined card is an outcome the
//! client handles, not a server error.

use crate::envelope::ResponseEnvelope;
use crate::intent::{PaymentIntentResult, PaymentIntentStatus};
use crate::request::PaymentRequest;
use serde_json::json;

/// Classify the result of a create-and-confirm call.
///
/// The success payload echoes `amount`, `currency`, and `description`
/// from the validated request rather than re-deriving them from the
/// provider object, so the caller sees exactly what it sent.
pub fn classify_confirmation(
    intent: &PaymentIntentResult,
    request: &PaymentRequest,
) -> ResponseEnvelope {
    match intent.status {
        PaymentIntentStatus::Succeeded => ResponseEnvelope::ok_with_message(
            "Payment processed successfully",
            json!({
                "payment_intent_id": intent.id,
                "status": intent.status.as_str(),
                "amount": request.amount,
                "currency": request.currency,
                "description": request.description,
            }),
        ),
        PaymentIntentStatus::RequiresAction => ResponseEnvelope::action_required(json!({
            "payment_intent_id": intent.id,
            "client_secret": intent.client_secret,
            "next_action": intent.next_action,
        })),
        _ => ResponseEnvelope::failure_with_data(
            format!(
                "Payment failed: {}",
                intent
                    .last_error_message
                    .as_deref()
                    .unwrap_or("Unknown error")
            ),
            json!({
                "payment_intent_id": intent.id,
                "status": intent.status.as_str(),
            }),
        ),
    }
}
