//! # Intent Types
//!
//! Gateway-neutral views of provider intent objects. The gateway
//! adapter maps wire responses into these; the classifier and handlers
//! never see provider JSON directly.

use serde_json::Value;

/// Lifecycle status of a payment intent after a confirmation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentIntentStatus {
    /// Charge completed
    Succeeded,
    /// Client must run a follow-up step (3D Secure etc.)
    RequiresAction,
    /// Attached method was rejected; a new one is needed
    RequiresPaymentMethod,
    /// Created but not yet confirmed
    RequiresConfirmation,
    /// Provider is still settling the charge
    Processing,
    /// Authorized, awaiting capture
    RequiresCapture,
    /// Intent was canceled
    Canceled,
    /// Status string this build does not know; carried verbatim
    Other(String),
}

impl PaymentIntentStatus {
    /// Parse a provider status string
    pub fn from_wire(status: &str) -> Self {
        match status {
            "succeeded" => PaymentIntentStatus::Succeeded,
            "requires_action" => PaymentIntentStatus::RequiresAction,
            "requires_payment_method" => PaymentIntentStatus::RequiresPaymentMethod,
            "requires_confirmation" => PaymentIntentStatus::RequiresConfirmation,
            "processing" => PaymentIntentStatus::Processing,
            "requires_capture" => PaymentIntentStatus::RequiresCapture,
            "canceled" => PaymentIntentStatus::Canceled,
            other => PaymentIntentStatus::Other(other.to_string()),
        }
    }

    /// The provider's snake_case status string
    pub fn as_str(&self) -> &str {
        match self {
            PaymentIntentStatus::Succeeded => "succeeded",
            PaymentIntentStatus::RequiresAction => "requires_action",
            PaymentIntentStatus::RequiresPaymentMethod => "requires_payment_method",
            PaymentIntentStatus::RequiresConfirmation => "requires_confirmation",
            PaymentIntentStatus::Processing => "processing",
            PaymentIntentStatus::RequiresCapture => "requires_capture",
            PaymentIntentStatus::Canceled => "canceled",
            PaymentIntentStatus::Other(status) => status,
        }
    }
}

impl std::fmt::Display for PaymentIntentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment intent as it stands after create-and-confirm
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntentResult {
    /// Provider intent id (`pi_...`)
    pub id: String,

    /// Status after the confirmation attempt
    pub status: PaymentIntentStatus,

    /// Client secret, present when the client must continue the flow
    pub client_secret: Option<String>,

    /// Provider's next-action object, passed through opaquely
    pub next_action: Option<Value>,

    /// Message from the provider's last payment error, if any
    pub last_error_message: Option<String>,
}

/// A created setup intent ready for client-side confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct SetupIntentResult {
    /// Provider setup intent id (`seti_...`)
    pub id: String,

    /// Client secret the frontend hands to the provider SDK
    pub client_secret: String,
}
