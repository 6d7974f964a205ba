//! Client example demonstrating the full purchase/verify/refund flow
//! against a local stand-in for the gateway.
//!
//! Run with: cargo run -p nextpay-client --example purchase_flow

use httpmock::prelude::*;
use nextpay_client::NextPayClient;
use nextpay_types::{Currency, PurchaseOptions};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("debug").init();

    // Local stand-in for the gateway. A real integration only needs
    // NextPayClient::new with a merchant token.
    let gateway = MockServer::start();
    gateway.mock(|when, then| {
        when.method(POST).path("/nx/gateway/token");
        then.status(200)
            .json_body(json!({"code": -1, "trans_id": "T123"}));
    });
    gateway.mock(|when, then| {
        when.method(POST)
            .path("/nx/gateway/verify")
            .x_www_form_urlencoded_tuple("refund_request", "yes_money_back");
        then.status(200).json_body(json!({"code": -90}));
    });
    gateway.mock(|when, then| {
        when.method(POST)
            .path("/nx/gateway/verify")
            .body("api_key=sandbox-token&amount=75000&trans_id=T123&currency=IRT");
        then.status(200).json_body(json!({"code": 0}));
    });

    println!("🚀 Gateway stand-in listening on {}", gateway.base_url());

    let client = NextPayClient::new("sandbox-token", 75_000, "https://shop.example/callback")
        .with_base_url(gateway.base_url());

    // Create the purchase and send the payer to the hosted page
    let opts = PurchaseOptions::new()
        .currency(Currency::IRT)
        .phone("09120000000")
        .payer_name("Alice");
    let trans_id = client.purchase("ord-1001", &opts).await?;
    println!("✅ Purchase token created: {trans_id}");
    println!("   Redirect payer to: {}", client.payment_page_url(&trans_id));

    // After the callback fires, confirm the payment
    client.verify(&trans_id, Some(Currency::IRT)).await?;
    println!("✅ Purchase verified");

    // Give the money back
    client.refund(&trans_id).await?;
    println!("✅ Purchase refunded");

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
