//! # Application State
//!
//! Shared state for the Axum application. The payment gateway and
//! session store are built once at startup and injected here; request
//! handlers see only the trait objects, so tests swap in mocks without
//! touching global state.

use crate::session::{SharedSessionStore, StaticTokenSessions};
use memberpay_core::BoxedPaymentGateway;
use memberpay_stripe::{StripeConfig, StripeGateway};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway (one instance, shared read-only)
    pub gateway: BoxedPaymentGateway,
    /// Member session lookup
    pub sessions: SharedSessionStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from explicit parts
    pub fn new(
        gateway: BoxedPaymentGateway,
        sessions: SharedSessionStore,
        config: AppConfig,
    ) -> Self {
        Self {
            gateway,
            sessions,
            config,
        }
    }

    /// Build state from the environment: Stripe credentials (which may
    /// be absent; the service then boots unconfigured and answers 503
    /// per request) and the static session token table.
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();
        let gateway = Arc::new(StripeGateway::new(StripeConfig::from_env()));
        let sessions = Arc::new(StaticTokenSessions::from_env());

        Self::new(gateway, sessions, config)
    }
}
