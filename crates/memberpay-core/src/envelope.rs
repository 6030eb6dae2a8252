//! # Response Envelope
//!
//! Every payment endpoint replies with the same JSON envelope, success
//! or failure, so clients parse one shape:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... }, "requires_action": true }
//! ```
//!
//! `message`, `data`, and `requires_action` are omitted when absent
//! rather than serialized as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform reply body for all payment endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the operation completed successfully
    pub success: bool,

    /// Human-readable outcome message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Endpoint-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Set (true) only when the client must run a follow-up step,
    /// e.g. 3D Secure authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_action: Option<bool>,
}

impl ResponseEnvelope {
    /// Successful reply carrying only data
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            requires_action: None,
        }
    }

    /// Successful reply with an outcome message and data
    pub fn ok_with_message(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            requires_action: None,
        }
    }

    /// Failed reply with a message only
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            requires_action: None,
        }
    }

    /// Failed reply with a message and diagnostic data
    pub fn failure_with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: Some(data),
            requires_action: None,
        }
    }

    /// Reply telling the client to run a follow-up authentication step.
    /// Not a success (the payment has not completed) and not a failure
    /// (no message): the data carries what the client needs to continue.
    pub fn action_required(data: Value) -> Self {
        Self {
            success: false,
            message: None,
            data: Some(data),
            requires_action: Some(true),
        }
    }
}
