//! # Credential Store
//!
//! Seam for looking up provider credentials. The platform's secret
//! storage sits behind `CredentialStore`; the service only ever asks
//! for the two Stripe keys by name. An empty value counts as absent,
//! so a blanked-out key leaves the service unconfigured rather than
//! half-configured.

use std::collections::HashMap;
use std::env;

/// Lookup key for the Stripe secret API key
pub const STRIPE_SECRET_KEY: &str = "stripe_secret_key";

/// Lookup key for the Stripe publishable key
pub const STRIPE_PUBLISHABLE_KEY: &str = "stripe_publishable_key";

/// Source of provider credentials
pub trait CredentialStore: Send + Sync {
    /// Fetch a credential by key. `None` when unset or empty.
    fn get(&self, key: &str) -> Option<String>;
}

/// Credentials from process environment variables.
///
/// A lookup key maps to its upper-cased variable name:
/// `stripe_secret_key` reads `STRIPE_SECRET_KEY`.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials;

impl EnvCredentials {
    /// Create a store, loading `.env` first if one is present
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        Self
    }
}

impl CredentialStore for EnvCredentials {
    fn get(&self, key: &str) -> Option<String> {
        match env::var(key.to_uppercase()) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// In-memory credentials for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a credential
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl CredentialStore for StaticCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
    }
}
