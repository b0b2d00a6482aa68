/// Default gateway base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = "BOOM-Payment-Gateway-Rust-Client/1.0";

/// Value injected as `metadata.clientLibrary` on payment requests.
pub const CLIENT_LIBRARY: &str = "rust";

/// Per-request timeout for API calls, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Per-request timeout for health checks, in seconds.
pub const HEALTH_TIMEOUT_SECS: u64 = 10;

/// Runtime gateway configuration. Constructed once per client instance and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub api_version: String,
}

impl Default for GatewayConfig {
    /// Defaults to a local development gateway with no API key.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Read configuration from `GATEWAY_URL`, `GATEWAY_API_KEY` and
    /// `GATEWAY_API_VERSION`, falling back to the local-development defaults.
    /// An empty `GATEWAY_API_KEY` counts as unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GATEWAY_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        Self {
            base_url: std::env::var("GATEWAY_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key,
            api_version: std::env::var("GATEWAY_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
        }
    }
}
