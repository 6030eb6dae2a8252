//! # MemberPay RS
//!
//! Session-gated payment API over Stripe.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PUBLISHABLE_KEY=pk_test_...
//! export SESSION_TOKENS=tok_alpha:42,tok_beta:77
//!
//! # Run the server
//! memberpay
//! ```

use memberpay_api::{routes, state::AppState};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::from_env();

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.gateway.provider_name());

    if !state.gateway.is_configured() {
        warn!("Stripe credentials missing; payment endpoints will return 503");
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 MemberPay starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: GET http://{}/health", addr);
        info!("🔑 Config: GET http://{}/api/v2/payments/config", addr);
        info!(
            "💾 Setup intent: POST http://{}/api/v2/payments/create-setup-intent",
            addr
        );
        info!(
            "💳 Payment: POST http://{}/api/v2/payments/process-payment",
            addr
        );
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  💳 MemberPay RS 💳
  ━━━━━━━━━━━━━━━━━━━
  Session-gated payments
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
