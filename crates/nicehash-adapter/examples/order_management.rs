/*
[INPUT]:  NICEHASH_API_ID / NICEHASH_API_KEY environment variables
[OUTPUT]: Balance and own orders; optionally lowers the first order's price
[POS]:    Examples - authenticated account and order endpoints
[UPDATE]: When adding new trading endpoints
*/

use nicehash_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Inspect the account and manage orders (API key required)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== NiceHash Order Management Example ===\n");

    let (Ok(api_id), Ok(api_key)) = (
        std::env::var("NICEHASH_API_ID"),
        std::env::var("NICEHASH_API_KEY"),
    ) else {
        eprintln!("Set NICEHASH_API_ID and NICEHASH_API_KEY first.");
        return;
    };

    let client = match NicehashClient::new(Credentials::new(api_id, api_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.get_balance().await {
        Ok(balance) => println!(
            "✓ Balance: {} BTC confirmed, {} BTC pending",
            balance.confirmed, balance.pending
        ),
        Err(e) if e.is_business_error() => {
            println!("✗ Rejected by server: {}", e);
            return;
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    let orders = match client
        .get_my_orders(AlgoType::DaggerHashimoto, Location::NiceHash)
        .await
    {
        Ok(orders) => orders,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    for order in &orders {
        println!(
            "  #{} {} price {} avail {} -> {}:{} alive={}",
            order.id,
            order.order_type,
            order.price,
            order.btc_avail,
            order.pool_host,
            order.pool_port,
            order.alive
        );
    }

    if std::env::var("NICEHASH_DECREASE").is_ok() {
        if let Some(order) = orders.first() {
            match client
                .order_set_price_decrease(order.algo, Location::NiceHash, order.id)
                .await
            {
                Ok(message) => println!("✓ {}", message),
                Err(e) => println!("✗ Error: {}", e),
            }
        }
    }

    println!("\n✓ Order management example complete");
}
