//! # Stripe Configuration
//!
//! Configuration for the Stripe gateway. Loading never fails: missing
//! credentials become empty strings so the service can boot without
//! keys and answer "not configured" per request instead of crashing
//! at startup.

use crate::credentials::{
    CredentialStore, EnvCredentials, STRIPE_PUBLISHABLE_KEY, STRIPE_SECRET_KEY,
};

/// Default Stripe API host
pub const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Pinned Stripe API version sent with every request
pub const STRIPE_API_VERSION: &str = "2024-12-18.acacia";

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...); empty when unset
    pub secret_key: String,

    /// Publishable key (pk_test_... or pk_live_...); empty when unset
    pub publishable_key: String,

    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from a credential store
    pub fn load(credentials: &impl CredentialStore) -> Self {
        Self {
            secret_key: credentials.get(STRIPE_SECRET_KEY).unwrap_or_default(),
            publishable_key: credentials.get(STRIPE_PUBLISHABLE_KEY).unwrap_or_default(),
            api_base_url: STRIPE_API_BASE.to_string(),
            api_version: STRIPE_API_VERSION.to_string(),
        }
    }

    /// Load configuration from environment variables
    /// (`STRIPE_SECRET_KEY`, `STRIPE_PUBLISHABLE_KEY`)
    pub fn from_env() -> Self {
        Self::load(&EnvCredentials::new())
    }

    /// Create config with explicit keys (for testing)
    pub fn new(secret_key: impl Into<String>, publishable_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            api_base_url: STRIPE_API_BASE.to_string(),
            api_version: STRIPE_API_VERSION.to_string(),
        }
    }

    /// Both keys present and non-empty
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty() && !self.publishable_key.is_empty()
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
