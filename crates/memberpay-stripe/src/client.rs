//! # Stripe Gateway
//!
//! `PaymentGateway` implementation over Stripe's REST API. Calls are
//! form-encoded, carry the bearer secret and a pinned API version, and
//! are single attempts with a 30 second timeout. Provider detail stays
//! in the error values (and server logs); handlers decide what clients
//! see.

use crate::config::StripeConfig;
use async_trait::async_trait;
use memberpay_core::{
    PaymentError, PaymentGateway, PaymentIntentResult, PaymentIntentStatus, PaymentRequest,
    PaymentResult, SetupIntentResult,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Stripe payment gateway
///
/// One instance is built at startup and shared across requests; it
/// holds only immutable config and a pooled HTTP client. May be built
/// without credentials, in which case every provider call reports the
/// system as not configured.
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// POST a form-encoded request to a Stripe endpoint and decode the
    /// response. Non-2xx replies are surfaced as `ProviderError` with
    /// Stripe's own message when the error envelope parses.
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form_params: &[(String, String)],
    ) -> PaymentResult<T> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(form_params)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(PaymentError::ProviderError(error_response.error.message));
            }

            return Err(PaymentError::ProviderError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, description))]
    async fn create_setup_intent(
        &self,
        account_id: i64,
        description: &str,
    ) -> PaymentResult<SetupIntentResult> {
        if !self.config.is_configured() {
            return Err(PaymentError::NotConfigured);
        }

        debug!("Creating Stripe setup intent");

        // Off-session usage, no customer object: each saved method is a
        // stateless, single-use setup tied to the account via metadata.
        let form_params: Vec<(String, String)> = vec![
            ("usage".to_string(), "off_session".to_string()),
            ("metadata[account_id]".to_string(), account_id.to_string()),
            ("metadata[description]".to_string(), description.to_string()),
            (
                "automatic_payment_methods[enabled]".to_string(),
                "true".to_string(),
            ),
            (
                "automatic_payment_methods[allow_redirects]".to_string(),
                "never".to_string(),
            ),
        ];

        let setup_intent: StripeSetupIntentResponse =
            self.post_form("/v1/setup_intents", &form_params).await?;

        info!("Created Stripe setup intent: id={}", setup_intent.id);

        Ok(SetupIntentResult {
            id: setup_intent.id,
            client_secret: setup_intent.client_secret,
        })
    }

    #[instrument(skip(self, request), fields(payment_method_id = %request.payment_method_id))]
    async fn confirm_payment(
        &self,
        request: &PaymentRequest,
        account_id: i64,
    ) -> PaymentResult<PaymentIntentResult> {
        if !self.config.is_configured() {
            return Err(PaymentError::NotConfigured);
        }

        debug!(
            "Creating payment intent: amount_minor={}, currency={}",
            request.amount_minor_units(),
            request.gateway_currency()
        );

        // Create and confirm in one call; manual confirmation keeps the
        // intent from silently retrying on the provider side.
        let form_params: Vec<(String, String)> = vec![
            (
                "amount".to_string(),
                request.amount_minor_units().to_string(),
            ),
            ("currency".to_string(), request.gateway_currency()),
            (
                "payment_method".to_string(),
                request.payment_method_id.clone(),
            ),
            ("confirmation_method".to_string(), "manual".to_string()),
            ("confirm".to_string(), "true".to_string()),
            ("return_url".to_string(), request.return_url.clone()),
            ("metadata[account_id]".to_string(), account_id.to_string()),
            (
                "metadata[description]".to_string(),
                request.description.clone(),
            ),
        ];

        let intent: StripePaymentIntentResponse =
            self.post_form("/v1/payment_intents", &form_params).await?;

        info!(
            "Confirmed payment intent: id={}, status={}",
            intent.id, intent.status
        );

        Ok(PaymentIntentResult {
            id: intent.id,
            status: PaymentIntentStatus::from_wire(&intent.status),
            client_secret: intent.client_secret,
            next_action: intent.next_action,
            last_error_message: intent.last_payment_error.and_then(|e| e.message),
        })
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn publishable_key(&self) -> &str {
        &self.config.publishable_key
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeSetupIntentResponse {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntentResponse {
    id: String,
    status: String,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    next_action: Option<serde_json::Value>,
    #[serde(default)]
    last_payment_error: Option<StripeLastPaymentError>,
}

#[derive(Debug, Deserialize)]
struct StripeLastPaymentError {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> StripeGateway {
        let config = StripeConfig::new("sk_test_abc123", "pk_test_xyz789")
            .with_api_base_url(server.uri());
        StripeGateway::new(config)
    }

    fn test_request(amount: f64, currency: &str) -> PaymentRequest {
        PaymentRequest::from_parts(
            Some("pm_card_visa".into()),
            Some(amount),
            Some(currency.into()),
            Some("Club dues".into()),
            None,
        )
        .unwrap()
    }

    async fn recorded_body(server: &MockServer) -> String {
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        String::from_utf8_lossy(&requests[0].body).into_owned()
    }

    #[tokio::test]
    async fn test_create_setup_intent_wire_format() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/setup_intents"))
            .and(header("Authorization", "Bearer sk_test_abc123"))
            .and(header("Stripe-Version", "2024-12-18.acacia"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "seti_123",
                "object": "setup_intent",
                "client_secret": "seti_123_secret_456",
                "status": "requires_confirmation",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let setup = gateway
            .create_setup_intent(42, "Payment method setup")
            .await
            .unwrap();

        assert_eq!(setup.id, "seti_123");
        assert_eq!(setup.client_secret, "seti_123_secret_456");

        // form_urlencoded escapes brackets as %5B / %5D and spaces as +
        let body = recorded_body(&server).await;
        assert!(body.contains("usage=off_session"));
        assert!(body.contains("metadata%5Baccount_id%5D=42"));
        assert!(body.contains("metadata%5Bdescription%5D=Payment+method+setup"));
        assert!(body.contains("automatic_payment_methods%5Benabled%5D=true"));
        assert!(body.contains("automatic_payment_methods%5Ballow_redirects%5D=never"));
        assert!(!body.contains("customer"));
    }

    #[tokio::test]
    async fn test_confirm_payment_wire_format() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(header("Authorization", "Bearer sk_test_abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_123",
                "object": "payment_intent",
                "status": "succeeded",
                "client_secret": "pi_123_secret_456",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let request = test_request(12.345, "USD");
        let intent = gateway.confirm_payment(&request, 42).await.unwrap();

        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.status, PaymentIntentStatus::Succeeded);
        assert_eq!(intent.last_error_message, None);

        let body = recorded_body(&server).await;
        assert!(body.contains("amount=1235"));
        assert!(body.contains("currency=usd"));
        assert!(body.contains("payment_method=pm_card_visa"));
        assert!(body.contains("confirmation_method=manual"));
        assert!(body.contains("confirm=true"));
        assert!(body.contains("return_url=https%3A%2F%2Fexample.com"));
        assert!(body.contains("metadata%5Baccount_id%5D=42"));
        assert!(body.contains("metadata%5Bdescription%5D=Club+dues"));
    }

    #[tokio::test]
    async fn test_confirm_payment_maps_requires_action() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_3ds",
                "status": "requires_action",
                "client_secret": "pi_3ds_secret",
                "next_action": {"type": "use_stripe_sdk"},
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let intent = gateway
            .confirm_payment(&test_request(25.0, "USD"), 7)
            .await
            .unwrap();

        assert_eq!(intent.status, PaymentIntentStatus::RequiresAction);
        assert_eq!(intent.client_secret.as_deref(), Some("pi_3ds_secret"));
        assert_eq!(
            intent.next_action,
            Some(json!({"type": "use_stripe_sdk"}))
        );
    }

    #[tokio::test]
    async fn test_confirm_payment_maps_last_payment_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_declined",
                "status": "requires_payment_method",
                "last_payment_error": {"message": "Your card was declined."},
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let intent = gateway
            .confirm_payment(&test_request(25.0, "USD"), 7)
            .await
            .unwrap();

        assert_eq!(intent.status, PaymentIntentStatus::RequiresPaymentMethod);
        assert_eq!(
            intent.last_error_message.as_deref(),
            Some("Your card was declined.")
        );
    }

    #[tokio::test]
    async fn test_provider_error_surfaces_stripe_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": {
                    "type": "card_error",
                    "code": "card_declined",
                    "message": "Your card has insufficient funds.",
                }
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway
            .confirm_payment(&test_request(25.0, "USD"), 7)
            .await
            .unwrap_err();

        match err {
            PaymentError::ProviderError(message) => {
                assert_eq!(message, "Your card has insufficient funds.")
            }
            other => panic!("expected ProviderError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_still_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/setup_intents"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream blew up"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway.create_setup_intent(42, "setup").await.unwrap_err();

        match err {
            PaymentError::ProviderError(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("upstream blew up"));
            }
            other => panic!("expected ProviderError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bad_success_body_is_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway
            .confirm_payment(&test_request(25.0, "USD"), 7)
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Serialization(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Nothing listens on port 9 (discard); connection is refused.
        let config = StripeConfig::new("sk_test_abc123", "pk_test_xyz789")
            .with_api_base_url("http://127.0.0.1:9");
        let gateway = StripeGateway::new(config);

        let err = gateway
            .confirm_payment(&test_request(25.0, "USD"), 7)
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::NetworkError(_)));
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_short_circuits() {
        let gateway = StripeGateway::new(StripeConfig::new("", ""));

        assert!(!gateway.is_configured());

        let err = gateway.create_setup_intent(42, "setup").await.unwrap_err();
        assert!(matches!(err, PaymentError::NotConfigured));

        let err = gateway
            .confirm_payment(&test_request(25.0, "USD"), 7)
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::NotConfigured));
    }

    #[test]
    fn test_gateway_reports_publishable_key() {
        let gateway = StripeGateway::new(StripeConfig::new("sk_test_abc123", "pk_test_xyz789"));
        assert_eq!(gateway.publishable_key(), "pk_test_xyz789");
        assert_eq!(gateway.provider_name(), "stripe");
    }
}
