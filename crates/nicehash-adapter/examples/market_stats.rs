/*
[INPUT]:  Optional provider address (first CLI argument)
[OUTPUT]: Market statistics and provider workers printed to stdout
[POS]:    Examples - public statistics queries
[UPDATE]: When adding new public endpoints
*/

use nicehash_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query public market data (no API key required)
///
/// Run with `RUST_LOG=nicehash_adapter=debug` to see request/response dumps.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== NiceHash Market Stats Example ===\n");

    let config = ClientConfig {
        user_agent: Some("nicehash-adapter-example/0.1".to_string()),
        debug: true,
        ..ClientConfig::default()
    };
    let client = match NicehashClient::with_config(config, Credentials::default()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.get_version().await {
        Ok(version) => println!("✓ API version: {}", version),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nCurrent global stats:");
    match client.get_stats_global_current().await {
        Ok(stats) => {
            for stat in stats {
                println!("  {:<16} price {:>10} speed {:>16}", stat.algo, stat.price, stat.speed);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nDaggerHashimoto orders (all locations):");
    match client.get_orders(AlgoType::DaggerHashimoto, None).await {
        Ok(orders) => println!("✓ {} orders", orders.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    let Some(addr) = std::env::args().nth(1) else {
        println!("\nPass a provider address to query provider statistics.");
        return;
    };

    println!("\nProvider {}:", addr);
    match client.get_stats_provider_ex(&addr).await {
        Ok(stats) => {
            for current in &stats.current {
                println!(
                    "  {:<16} accepted {:>10} {} unpaid {}",
                    current.algo, current.accepted_speed, current.suffix, current.unpaid
                );
            }
            for past in &stats.past {
                println!("  {} active history buckets for {}", past.data.len(), past.algo);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    match client
        .get_stats_provider_workers(&addr, AlgoType::DaggerHashimoto)
        .await
    {
        Ok(workers) => {
            for worker in workers.workers {
                println!(
                    "  worker {:<12} {:>10} ({}, difficulty {})",
                    worker.name, worker.accepted_speed, worker.location, worker.difficulty
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
