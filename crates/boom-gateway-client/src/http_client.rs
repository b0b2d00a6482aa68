use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::constants::{
    GatewayConfig, CLIENT_LIBRARY, HEALTH_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use crate::error::GatewayError;
use crate::payment::{PaymentFormData, PaymentRequest};
use crate::response::{ApiEnvelope, AuthData, HealthStatus, PaymentResult};

/// Client for the BOOM Payment Gateway HTTP API.
///
/// Wraps `reqwest::Client`. Every method issues a single request against
/// `{base_url}/api/{version}{path}` (or `{base_url}/health`) and decodes the
/// JSON response. No retries; errors propagate as [`GatewayError`].
#[derive(Debug)]
pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
    headers: HeaderMap,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::ConfigError(format!("failed to build HTTP client: {e}")))?;
        Self::with_http_client(config, http)
    }

    /// Create a client with a custom `reqwest::Client`.
    pub fn with_http_client(
        mut config: GatewayConfig,
        http: reqwest::Client,
    ) -> Result<Self, GatewayError> {
        url::Url::parse(&config.base_url)
            .map_err(|e| GatewayError::ConfigError(format!("invalid base URL: {e}")))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let headers = default_headers(config.api_key.as_deref())?;

        Ok(Self {
            http,
            config,
            headers,
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The header set applied to every request. Built once at construction
    /// and never mutated afterward.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Full URL for an API path, e.g. `/payments/process`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/api/{}{}",
            self.config.base_url, self.config.api_version, path
        )
    }

    /// Check gateway health. Uses the shorter health-check timeout.
    pub async fn health_check(&self) -> Result<HealthStatus, GatewayError> {
        let url = format!("{}/health", self.config.base_url);
        tracing::debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("health check failed: {e}")))?;

        let status = resp.status();
        let body = read_body(resp).await?;
        if !status.is_success() {
            return Err(GatewayError::ResponseError(error_message(status, &body)));
        }
        serde_json::from_str(&body)
            .map_err(|e| GatewayError::ResponseError(format!("invalid health response: {e}")))
    }

    /// Process a payment. Picks the secure endpoint when an API key is
    /// configured, and stamps `clientLibrary`/`timestamp` into the request
    /// metadata before sending.
    pub async fn process_payment(
        &self,
        mut payment: PaymentRequest,
    ) -> Result<PaymentResult, GatewayError> {
        payment.validate()?;
        enrich_metadata(&mut payment);

        let req = self.api_request(Method::POST, self.payment_path()).json(&payment);
        self.execute(req).await
    }

    /// Look up a transaction by id. The bearer token rides on this one
    /// request only; the shared default header set stays untouched.
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
        auth_token: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        let req = self
            .api_request(Method::GET, &format!("/transactions/{transaction_id}"))
            .bearer_auth(auth_token);
        self.execute(req).await
    }

    /// Authenticate with the admin API. The response is expected to carry a
    /// token for later authenticated calls.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthData, GatewayError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let req = self.api_request(Method::POST, "/auth/login").json(&body);
        self.execute(req).await
    }

    /// Build payment form data for a frontend integration. No network call.
    pub fn create_payment_form_data(
        &self,
        amount: u64,
        currency: &str,
        order_id: Option<String>,
    ) -> PaymentFormData {
        PaymentFormData {
            amount,
            currency: currency.to_string(),
            order_id: order_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp: Utc::now().to_rfc3339(),
            api_url: self.endpoint("/payments/process"),
        }
    }

    fn payment_path(&self) -> &'static str {
        if self.config.api_key.is_some() {
            "/payments/process-secure"
        } else {
            "/payments/process"
        }
    }

    fn api_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.endpoint(path);
        tracing::debug!("{method} {url}");
        self.http
            .request(method, url)
            .headers(self.headers.clone())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Send a request and unwrap the gateway's response envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let resp = req
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(format!("request failed: {e}")))?;

        let status = resp.status();
        let body = read_body(resp).await?;
        if !status.is_success() {
            return Err(GatewayError::ResponseError(error_message(status, &body)));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| GatewayError::ResponseError(format!("invalid response body: {e}")))?;
        if !envelope.success {
            return Err(GatewayError::ResponseError(
                envelope
                    .message
                    .unwrap_or_else(|| "unknown gateway error".to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| GatewayError::ResponseError("response missing data".to_string()))
    }
}

/// Stamp the client-library tag and current UTC timestamp into the request
/// metadata. Caller-supplied keys survive; same-named keys are overwritten.
fn enrich_metadata(payment: &mut PaymentRequest) {
    payment
        .metadata
        .insert("clientLibrary".to_string(), CLIENT_LIBRARY.to_string());
    payment
        .metadata
        .insert("timestamp".to_string(), Utc::now().to_rfc3339());
}

fn default_headers(api_key: Option<&str>) -> Result<HeaderMap, GatewayError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        reqwest::header::USER_AGENT,
        HeaderValue::from_static(USER_AGENT),
    );
    if let Some(key) = api_key {
        let value = HeaderValue::from_str(key)
            .map_err(|e| GatewayError::ConfigError(format!("invalid API key: {e}")))?;
        headers.insert("X-API-Key", value);
    }
    Ok(headers)
}

async fn read_body(resp: reqwest::Response) -> Result<String, GatewayError> {
    resp.text()
        .await
        .map_err(|e| GatewayError::ConnectionError(format!("failed to read response body: {e}")))
}

/// Human-readable message for a non-2xx response, preferring the gateway's
/// own `message` field when the body is a JSON envelope.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
        if let Some(message) = envelope.message {
            return format!("HTTP {status}: {message}");
        }
    }
    let snippet: String = body.chars().take(200).collect();
    if snippet.is_empty() {
        format!("HTTP {status}")
    } else {
        format!("HTTP {status}: {snippet}")
    }
}
