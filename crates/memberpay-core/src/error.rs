//! # Payment Error Types
//!
//! Typed error handling for the memberpay service.
//! All payment operations return `Result<T, PaymentError>`.
//!
//! Each variant maps to exactly one HTTP status. The gate variants
//! (`AuthRequired`, `MethodNotAllowed`, `NotConfigured`) and
//! `InvalidRequest` carry client-facing messages in their `Display`
//! output; the 500-class variants carry internal detail that is logged
//! server-side and must never reach the wire.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Request arrived without a valid member session
    #[error("Authentication required")]
    AuthRequired,

    /// HTTP verb not supported by the endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Gateway credentials missing (either key empty)
    #[error("Payment system not configured")]
    NotConfigured,

    /// Invalid request data; the message is the wire message
    #[error("{0}")]
    InvalidRequest(String),

    /// Payment provider rejected the call (non-2xx API response)
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Provider returned a body we could not decode
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::AuthRequired => 401,
            PaymentError::MethodNotAllowed => 405,
            PaymentError::NotConfigured => 503,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::ProviderError(_) => 500,
            PaymentError::NetworkError(_) => 500,
            PaymentError::Serialization(_) => 500,
        }
    }

    /// Returns true if the `Display` output is safe to send to clients.
    ///
    /// Provider, network, and decode failures may embed upstream detail
    /// (API messages, URLs); callers replace those with a generic
    /// message at the edge.
    pub fn is_client_safe(&self) -> bool {
        matches!(
            self,
            PaymentError::AuthRequired
                | PaymentError::MethodNotAllowed
                | PaymentError::NotConfigured
                | PaymentError::InvalidRequest(_)
        )
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
