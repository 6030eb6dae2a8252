//! # memberpay-api
//!
//! HTTP API layer for memberpay-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Bearer-token session gate on every payment endpoint
//! - REST endpoints for payment config, setup intents, and charges
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v2/payments/config` | Publishable key for the frontend |
//! | POST | `/api/v2/payments/create-setup-intent` | Save a payment method |
//! | POST | `/api/v2/payments/process-payment` | Create and confirm a charge |

pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::create_router;
pub use session::{CurrentAccount, SessionStore, SharedSessionStore, StaticTokenSessions};
pub use state::{AppConfig, AppState};
