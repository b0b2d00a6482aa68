use serde::Deserialize;

/// The gateway's uniform response wrapper: `data` on success, `message` on
/// failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// The `transaction` part of a payment response. `amount` is echoed back by
/// the gateway in major units (dollars), unlike the request's minor units.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub id: String,
    pub status: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayInfo {
    pub response_message: String,
}

/// Success payload of a processed payment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    pub transaction: TransactionInfo,
    pub gateway: GatewayInfo,
}

/// Body of the `/health` endpoint. Not enveloped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub service: Option<String>,
    pub status: Option<String>,
}

/// Success payload of `/auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_payment_envelope() {
        let body = serde_json::json!({
            "success": true,
            "data": {
                "transaction": { "id": "txn_1", "status": "approved", "amount": 29.99 },
                "gateway": { "responseMessage": "Approved" }
            }
        });

        let envelope: ApiEnvelope<PaymentResult> = serde_json::from_value(body).unwrap();
        assert!(envelope.success);
        let result = envelope.data.unwrap();
        assert_eq!(result.transaction.id, "txn_1");
        assert_eq!(result.transaction.amount, 29.99);
        assert_eq!(result.gateway.response_message, "Approved");
    }

    #[test]
    fn test_decodes_failure_envelope_without_data() {
        let body = serde_json::json!({ "success": false, "message": "Card declined" });
        let envelope: ApiEnvelope<PaymentResult> = serde_json::from_value(body).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Card declined"));
    }

    #[test]
    fn test_health_fields_are_optional() {
        let health: HealthStatus = serde_json::from_str("{}").unwrap();
        assert!(health.service.is_none());
        assert!(health.status.is_none());
    }
}
