//! # memberpay-core
//!
//! Core types and traits for the memberpay payment service.
//!
//! This crate provides:
//! - `PaymentGateway` trait for implementing payment providers
//! - `PaymentRequest` validation for the charge flow
//! - `classify_confirmation` for mapping confirmed intents to client outcomes
//! - `ResponseEnvelope` for the uniform endpoint reply shape
//! - `PaymentError` for typed error handling with HTTP status mapping
//!
//! ## Example
//!
//! ```rust,ignore
//! use memberpay_core::{classify_confirmation, PaymentRequest};
//!
//! // Validate the raw body fields
//! let request = PaymentRequest::from_parts(
//!     Some("pm_card_visa".into()),
//!     Some(25.0),
//!     None,
//!     Some("Club dues".into()),
//!     None,
//! )?;
//!
//! // One provider call: create the intent and confirm it
//! let intent = gateway.confirm_payment(&request, account_id).await?;
//!
//! // Three outcomes, all HTTP 200: succeeded / requires action / failed
//! let envelope = classify_confirmation(&intent, &request);
//! ```

pub mod classify;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod intent;
pub mod money;
pub mod request;

// Re-exports for convenience
pub use classify::classify_confirmation;
pub use envelope::ResponseEnvelope;
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use intent::{PaymentIntentResult, PaymentIntentStatus, SetupIntentResult};
pub use money::{
    gateway_currency, is_currency_supported, to_minor_units, DEFAULT_CURRENCY,
    SUPPORTED_CURRENCIES,
};
pub use request::{PaymentRequest, DEFAULT_DESCRIPTION, DEFAULT_RETURN_URL};
