/*
[INPUT]:  Symbol identifier (e.g., "BTCUSDT")
[OUTPUT]: Market data (symbol metadata, order book, recent trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use wallex_adapter::WallexClient;

/// Example: Query market data (no authentication required)
///
/// These endpoints are public and don't require an API key.
#[tokio::main]
async fn main() {
    println!("=== Wallex Market Data Example ===\n");

    let client = match WallexClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let symbol = "BTCUSDT";

    // Market metadata for all symbols
    println!("Querying markets...");
    match client.get_markets().await {
        Ok(markets) => println!("✓ {} markets listed", markets.result.symbols.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Order book for one symbol
    println!("\nQuerying order book for {}...", symbol);
    match client.get_order_book(symbol).await {
        Ok(depth) => println!(
            "✓ {} asks / {} bids",
            depth.result.ask.len(),
            depth.result.bid.len()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Recent trades
    println!("\nQuerying recent trades for {}...", symbol);
    match client.get_recent_trades(symbol).await {
        Ok(trades) => println!("✓ {} recent trades", trades.result.latest_trades.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
