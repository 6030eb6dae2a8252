//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Payments (session gated):
///   - GET  /api/v2/payments/config - Publishable key for the frontend
///   - POST /api/v2/payments/create-setup-intent - Save a payment method
///   - POST /api/v2/payments/process-payment - Create and confirm a charge
///
/// - Health:
///   - GET /health - Liveness check, no session required
///
/// Each payment route carries a method fallback so an unsupported verb
/// gets the enveloped 405 instead of axum's bare default. The fallback
/// handler itself takes the session extractor, so the auth gate still
/// runs first whatever the verb.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the frontend runs on its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let payment_routes = Router::new()
        .route(
            "/config",
            get(handlers::payment_config).fallback(handlers::method_not_allowed),
        )
        .route(
            "/create-setup-intent",
            post(handlers::create_setup_intent).fallback(handlers::method_not_allowed),
        )
        .route(
            "/process-payment",
            post(handlers::process_payment).fallback(handlers::method_not_allowed),
        );

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        // API v2
        .nest("/api/v2/payments", payment_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
