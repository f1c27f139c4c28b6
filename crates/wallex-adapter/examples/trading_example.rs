/*
[INPUT]:  WALLEX_API_KEY environment variable, order parameters
[OUTPUT]: Order placement, status lookup, and cancellation
[POS]:    Examples - authenticated trading flow
[UPDATE]: When adding new order endpoints or changing order flow
*/

use wallex_adapter::{CreateOrderParams, OrderType, Side, WallexClient, WallexError};

/// Example: Authenticated trading flow (requires WALLEX_API_KEY)
///
/// Places a LIMIT order, looks up its status, then cancels it.
#[tokio::main]
async fn main() {
    println!("=== Wallex Trading Example ===\n");

    let api_key = match std::env::var("WALLEX_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set WALLEX_API_KEY to run this example");
            return;
        }
    };

    let mut client = match WallexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    client.set_api_key(api_key);
    println!("✓ HTTP client created with API key\n");

    // Balances first, to confirm the key works
    println!("Querying balances...");
    match client.get_balances().await {
        Ok(balances) => println!("✓ {} assets in wallet", balances.result.balances.len()),
        Err(WallexError::Api(e)) => {
            println!("✗ Wallex rejected the call: {} (code {:?})", e.message, e.code);
            return;
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    // Place a small limit order far from the market
    let params = CreateOrderParams {
        symbol: "BTCUSDT".to_string(),
        order_type: OrderType::Limit,
        side: Side::Buy,
        price: Some("1000".parse().expect("price")),
        quantity: "0.001".parse().expect("quantity"),
        client_order_id: Some("example-order-1".to_string()),
    };

    println!("\nPlacing order...");
    let order = match client.create_order(&params).await {
        Ok(response) => response.result,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!("✓ Order {} placed, status {}", order.client_order_id, order.status);

    // Look it up, then cancel it
    println!("\nQuerying order status...");
    match client.get_order_status(&order.client_order_id).await {
        Ok(response) => println!("✓ Status: {}", response.result.status),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nCancelling order...");
    match client.cancel_order(&order.client_order_id).await {
        Ok(response) => println!("✓ Status: {}", response.result.status),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
