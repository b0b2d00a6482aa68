use gateway_client::{
    CardData, CustomerInfo, GatewayClient, GatewayConfig, OrderData, PaymentRequest,
};
use uuid::Uuid;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();
    println!("Gateway: {}", config.base_url);

    let client = match GatewayClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    match client.health_check().await {
        Ok(health) => {
            println!(
                "Service: {} ({})",
                health.service.as_deref().unwrap_or("unknown"),
                health.status.as_deref().unwrap_or("unknown"),
            );
        }
        Err(e) => {
            eprintln!("Health check failed: {e}");
            eprintln!("Make sure the gateway is running and accessible.");
            std::process::exit(1);
        }
    }

    let mut payment = PaymentRequest::new(
        2999, // $29.99
        "USD",
        CardData {
            card_number: "4111111111111111".to_string(), // test Visa card
            expiry_date: "12/25".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "John Doe".to_string(),
        },
    );
    payment.customer_info = Some(CustomerInfo {
        email: "customer@example.com".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    });
    payment.order_data = Some(OrderData {
        order_id: format!("ORDER-{}", Uuid::new_v4()),
        description: Some("Test payment from Rust".to_string()),
    });

    println!(
        "\nProcessing payment of ${:.2} with card {}",
        payment.amount as f64 / 100.0,
        payment.card_data.masked_number(),
    );

    match client.process_payment(payment).await {
        Ok(result) => {
            println!("Payment successful!");
            println!("Transaction ID: {}", result.transaction.id);
            println!("Status: {}", result.transaction.status);
            println!("Amount: ${:.2}", result.transaction.amount);
            println!("Response: {}", result.gateway.response_message);
        }
        Err(e) => {
            eprintln!("Payment failed: {e}");
            std::process::exit(1);
        }
    }
}
