//! Rust client SDK for the BOOM Payment Gateway API.
//!
//! Provides a thin JSON-over-HTTP client: health check, payment processing,
//! transaction lookup, authentication and payment-form-data construction.
//! Each call is one request/response cycle with no retries.
//!
//! # Quick Example
//!
//! ```no_run
//! use gateway_client::{CardData, GatewayClient, GatewayConfig, PaymentRequest};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = GatewayClient::new(GatewayConfig::new("http://localhost:3000")).unwrap();
//!
//! let payment = PaymentRequest::new(
//!     2999, // $29.99 in cents
//!     "USD",
//!     CardData {
//!         card_number: "4111111111111111".to_string(),
//!         expiry_date: "12/25".to_string(),
//!         cvv: "123".to_string(),
//!         cardholder_name: "John Doe".to_string(),
//!     },
//! );
//!
//! let result = client.process_payment(payment).await.unwrap();
//! println!("Transaction {}: {}", result.transaction.id, result.transaction.status);
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod http_client;
pub mod payment;
pub mod response;

pub use constants::GatewayConfig;
pub use error::GatewayError;
pub use http_client::GatewayClient;
pub use payment::{CardData, CustomerInfo, OrderData, PaymentFormData, PaymentRequest};
pub use response::{
    ApiEnvelope, AuthData, GatewayInfo, HealthStatus, PaymentResult, TransactionInfo,
};
