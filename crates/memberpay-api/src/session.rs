//! # Session Gate
//!
//! Member authentication for the payment endpoints. The platform's
//! session service sits behind `SessionStore`; this crate ships a
//! static token table for deployments and tests. The `CurrentAccount`
//! extractor runs before anything else in a handler, so every route
//! answers 401 with the standard envelope when the session is missing,
//! whatever the verb or body.

use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, StatusCode};
use axum::Json;
use memberpay_core::{PaymentError, ResponseEnvelope};
use std::collections::HashMap;
use std::sync::Arc;

/// Source of authenticated member sessions
pub trait SessionStore: Send + Sync {
    /// Resolve a bearer token to the account it belongs to
    fn account_for_token(&self, token: &str) -> Option<i64>;
}

/// Type alias for a shared session store (dynamic dispatch)
pub type SharedSessionStore = Arc<dyn SessionStore>;

/// Token-to-account table seeded from configuration.
///
/// Stands in for the platform's session service: `SESSION_TOKENS`
/// carries comma-separated `token:account_id` pairs. Entries that do
/// not parse are skipped.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenSessions {
    tokens: HashMap<String, i64>,
}

impl StaticTokenSessions {
    /// Create an empty table (every request is unauthenticated)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a session token
    pub fn with_token(mut self, token: impl Into<String>, account_id: i64) -> Self {
        self.tokens.insert(token.into(), account_id);
        self
    }

    /// Load the token table from the `SESSION_TOKENS` environment
    /// variable (`token:account_id,token:account_id,...`)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::parse(&std::env::var("SESSION_TOKENS").unwrap_or_default())
    }

    fn parse(raw: &str) -> Self {
        let mut sessions = Self::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            if let Some((token, account)) = entry.split_once(':') {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                if let Ok(account_id) = account.trim().parse() {
                    sessions.tokens.insert(token.to_string(), account_id);
                }
            }
        }
        sessions
    }

    /// Number of registered sessions
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl SessionStore for StaticTokenSessions {
    fn account_for_token(&self, token: &str) -> Option<i64> {
        self.tokens.get(token).copied()
    }
}

/// Extractor for the authenticated member account.
///
/// Reads `Authorization: Bearer <token>` and resolves it through the
/// session store; rejects with the 401 envelope otherwise. Rejections
/// are not logged.
#[derive(Debug, Clone, Copy)]
pub struct CurrentAccount(pub i64);

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = (StatusCode, Json<ResponseEnvelope>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let account_id = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|token| state.sessions.account_for_token(token));

        match account_id {
            Some(account_id) => Ok(CurrentAccount(account_id)),
            None => Err((
                StatusCode::UNAUTHORIZED,
                Json(ResponseEnvelope::failure(
                    PaymentError::AuthRequired.to_string(),
                )),
            )),
        }
    }
}
