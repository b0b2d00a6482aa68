use thiserror::Error;

/// Errors returned by gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request could not complete: connect failure, DNS/TLS failure or
    /// timeout.
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// The gateway answered, but with a non-2xx status, an undecodable body,
    /// or a `success: false` envelope.
    #[error("response error: {0}")]
    ResponseError(String),

    /// The payment request violates a documented invariant and was never sent.
    #[error("invalid payment: {0}")]
    InvalidPayment(String),

    #[error("config error: {0}")]
    ConfigError(String),
}
