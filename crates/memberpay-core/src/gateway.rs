//! # Payment Gateway Trait
//!
//! Seam between the HTTP layer and the payment provider. The binary
//! builds one gateway at startup and shares it through application
//! state; handlers and tests only ever see the trait.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              PaymentGateway (trait)          │
//! │  ├── create_setup_intent()                   │
//! │  ├── confirm_payment()                       │
//! │  ├── is_configured() / publishable_key()     │
//! │  └── provider_name()                         │
//! └──────────────────────────────────────────────┘
//!                        ▲
//!               ┌────────┴────────┐
//!               │  StripeGateway  │
//!               └─────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::intent::{PaymentIntentResult, SetupIntentResult};
use crate::request::PaymentRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
///
/// A gateway may be constructed without credentials; `is_configured`
/// reports whether provider calls can succeed, and the HTTP layer
/// answers 503 when it returns false. The network methods are single
/// attempts: the gateway never retries on the caller's behalf.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a setup intent so the client can save a payment method.
    ///
    /// # Arguments
    /// * `account_id` - Member account the method will belong to (attached as metadata)
    /// * `description` - Free-text label attached as metadata
    async fn create_setup_intent(
        &self,
        account_id: i64,
        description: &str,
    ) -> PaymentResult<SetupIntentResult>;

    /// Create a payment intent and confirm it in the same provider call.
    ///
    /// Returns the intent in whatever state confirmation left it;
    /// classifying that state is the caller's concern.
    async fn confirm_payment(
        &self,
        request: &PaymentRequest,
        account_id: i64,
    ) -> PaymentResult<PaymentIntentResult>;

    /// Whether both provider credentials are present.
    fn is_configured(&self) -> bool;

    /// Client-side key handed to frontends for the provider SDK.
    fn publishable_key(&self) -> &str;

    /// Provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
