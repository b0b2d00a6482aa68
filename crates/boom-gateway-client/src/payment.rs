use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Card details as the gateway expects them on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub card_number: String,
    /// "MM/YY"
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
}

impl CardData {
    /// Display form of the card number: `****` plus at most the last four
    /// characters. Safe for logs and demo output.
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("****{tail}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A payment to process. `amount` is in minor currency units (cents).
///
/// `metadata` may carry arbitrary caller keys; the client adds
/// `clientLibrary` and `timestamp` entries at send time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: u64,
    pub currency: String,
    pub card_data: CardData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_info: Option<CustomerInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_data: Option<OrderData>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl PaymentRequest {
    pub fn new(amount: u64, currency: impl Into<String>, card_data: CardData) -> Self {
        Self {
            amount,
            currency: currency.into(),
            card_data,
            customer_info: None,
            order_data: None,
            metadata: HashMap::new(),
        }
    }

    /// Check the invariants the gateway documents for payment requests.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.amount == 0 {
            return Err(GatewayError::InvalidPayment(
                "amount must be greater than zero".to_string(),
            ));
        }
        if self.card_data.card_number.is_empty() {
            return Err(GatewayError::InvalidPayment(
                "card number must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Data for a frontend payment form. Built locally, no network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFormData {
    pub amount: u64,
    pub currency: String,
    pub order_id: String,
    pub timestamp: String,
    pub api_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> CardData {
        CardData {
            card_number: "4111111111111111".to_string(),
            expiry_date: "12/25".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "John Doe".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_sample_payment() {
        let payment = PaymentRequest::new(2999, "USD", sample_card());
        assert!(payment.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_amount() {
        let payment = PaymentRequest::new(0, "USD", sample_card());
        let err = payment.validate().unwrap_err();
        assert!(matches!(err, GatewayError::InvalidPayment(_)));
    }

    #[test]
    fn test_validate_rejects_empty_card_number() {
        let mut payment = PaymentRequest::new(2999, "USD", sample_card());
        payment.card_data.card_number.clear();
        let err = payment.validate().unwrap_err();
        assert!(matches!(err, GatewayError::InvalidPayment(_)));
    }

    #[test]
    fn test_masked_number_keeps_last_four() {
        assert_eq!(sample_card().masked_number(), "****1111");
    }

    #[test]
    fn test_masked_number_short_input() {
        let mut card = sample_card();
        card.card_number = "42".to_string();
        assert_eq!(card.masked_number(), "****42");
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut payment = PaymentRequest::new(2999, "USD", sample_card());
        payment.customer_info = Some(CustomerInfo {
            email: "customer@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        });

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["cardData"]["cardNumber"], "4111111111111111");
        assert_eq!(json["cardData"]["expiryDate"], "12/25");
        assert_eq!(json["cardData"]["cardholderName"], "John Doe");
        assert_eq!(json["customerInfo"]["firstName"], "John");
        // Unset optional fields stay off the wire entirely.
        assert!(json.get("orderData").is_none());
        assert!(json.get("metadata").is_none());
    }
}
