//! # memberpay-stripe
//!
//! Stripe gateway for the memberpay payment service.
//!
//! This crate provides:
//!
//! 1. **StripeGateway** - `PaymentGateway` over Stripe's REST API
//!    - Setup intents for saving payment methods
//!    - Create-and-confirm payment intents (one call per charge)
//!    - Form-encoded requests, pinned API version
//!
//! 2. **CredentialStore** - the seam to the platform's secret storage
//!    - `EnvCredentials` for env/.env deployment
//!    - `StaticCredentials` for tests and embedding
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use memberpay_stripe::{StripeConfig, StripeGateway};
//! use memberpay_core::PaymentGateway;
//!
//! // Never fails: missing keys leave the gateway unconfigured and
//! // every endpoint answers 503 until credentials appear.
//! let config = StripeConfig::from_env();
//! let gateway = StripeGateway::new(config);
//!
//! if gateway.is_configured() {
//!     let setup = gateway.create_setup_intent(account_id, "Payment method setup").await?;
//!     // Hand setup.client_secret to the frontend SDK
//! }
//! ```

pub mod client;
pub mod config;
pub mod credentials;

// Re-exports
pub use client::StripeGateway;
pub use config::{StripeConfig, STRIPE_API_BASE, STRIPE_API_VERSION};
pub use credentials::{
    CredentialStore, EnvCredentials, StaticCredentials, STRIPE_PUBLISHABLE_KEY, STRIPE_SECRET_KEY,
};
