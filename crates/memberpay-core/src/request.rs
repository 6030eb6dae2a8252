//! # Payment Request
//!
//! Validated input for the charge flow. Raw endpoint bodies arrive as
//! optional fields; `PaymentRequest::from_parts` applies the required
//! checks and defaults, and everything downstream (gateway call,
//! classifier echo) works from the validated value.

use crate::error::{PaymentError, PaymentResult};
use crate::money;
use serde::{Deserialize, Serialize};

/// Description used when a charge request does not supply one
pub const DEFAULT_DESCRIPTION: &str = "Payment";

/// Return URL sent to the gateway when the client does not supply one.
/// Only ever followed for redirect-based methods, which the setup flow
/// disables; kept for wire completeness.
pub const DEFAULT_RETURN_URL: &str = "https://example.com";

/// A validated charge request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Gateway payment-method identifier (e.g. `pm_...`)
    pub payment_method_id: String,

    /// Amount in decimal major units (dollars)
    pub amount: f64,

    /// Currency code as the caller sent it; echoed back verbatim,
    /// lowercased only for the gateway wire
    pub currency: String,

    /// Charge description, echoed and attached as gateway metadata
    pub description: String,

    /// Where the gateway may send the customer after off-site steps
    pub return_url: String,
}

impl PaymentRequest {
    /// Validate raw body fields into a `PaymentRequest`.
    ///
    /// The required-field check runs before the amount check, so a body
    /// missing `payment_method_id` reports the missing fields even if
    /// it also carries a non-positive amount.
    pub fn from_parts(
        payment_method_id: Option<String>,
        amount: Option<f64>,
        currency: Option<String>,
        description: Option<String>,
        return_url: Option<String>,
    ) -> PaymentResult<Self> {
        let (payment_method_id, amount) = match (payment_method_id, amount) {
            (Some(id), Some(amount)) => (id, amount),
            _ => {
                return Err(PaymentError::InvalidRequest(
                    "Payment method ID and amount are required".to_string(),
                ))
            }
        };

        if amount <= 0.0 {
            return Err(PaymentError::InvalidRequest(
                "Amount must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            payment_method_id,
            amount,
            currency: currency.unwrap_or_else(|| money::DEFAULT_CURRENCY.to_string()),
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            return_url: return_url.unwrap_or_else(|| DEFAULT_RETURN_URL.to_string()),
        })
    }

    /// Amount in integer minor units for the gateway wire
    pub fn amount_minor_units(&self) -> i64 {
        money::to_minor_units(self.amount)
    }

    /// Currency code for the gateway wire (lowercase)
    pub fn gateway_currency(&self) -> String {
        money::gateway_currency(&self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_applies_defaults() {
        let request =
            PaymentRequest::from_parts(Some("pm_123".into()), Some(25.0), None, None, None)
                .unwrap();

        assert_eq!(request.payment_method_id, "pm_123");
        assert_eq!(request.amount, 25.0);
        assert_eq!(request.currency, "USD");
        assert_eq!(request.description, "Payment");
        assert_eq!(request.return_url, "https://example.com");
    }

    #[test]
    fn test_missing_payment_method_id() {
        let err = PaymentRequest::from_parts(None, Some(25.0), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Payment method ID and amount are required");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_missing_amount() {
        let err =
            PaymentRequest::from_parts(Some("pm_123".into()), None, None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Payment method ID and amount are required");
    }

    #[test]
    fn test_required_check_runs_before_amount_check() {
        // Missing id plus a bad amount still reports the missing fields.
        let err = PaymentRequest::from_parts(None, Some(-5.0), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Payment method ID and amount are required");
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        for amount in [0.0, -0.01, -100.0] {
            let err = PaymentRequest::from_parts(Some("pm_123".into()), Some(amount), None, None, None)
                .unwrap_err();
            assert_eq!(err.to_string(), "Amount must be greater than 0");
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn test_currency_casing_preserved() {
        let request = PaymentRequest::from_parts(
            Some("pm_123".into()),
            Some(10.0),
            Some("usd".into()),
            None,
            None,
        )
        .unwrap();

        assert_eq!(request.currency, "usd");
        assert_eq!(request.gateway_currency(), "usd");

        let upper = PaymentRequest::from_parts(
            Some("pm_123".into()),
            Some(10.0),
            Some("USD".into()),
            None,
            None,
        )
        .unwrap();

        assert_eq!(upper.currency, "USD");
        assert_eq!(upper.gateway_currency(), "usd");
    }

    #[test]
    fn test_minor_units_helper() {
        let request = PaymentRequest::from_parts(
            Some("pm_123".into()),
            Some(12.345),
            None,
            Some("Club dues".into()),
            Some("https://kickback.example/return".into()),
        )
        .unwrap();

        assert_eq!(request.amount_minor_units(), 1235);
        assert_eq!(request.description, "Club dues");
        assert_eq!(request.return_url, "https://kickback.example/return");
    }
}
