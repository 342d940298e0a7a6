//! Smoke-test binary for the rippled RPC library

use dotenv::dotenv;
use std::env;

use rippled_rpc::{ClientConfig, RippledClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let client = RippledClient::new(ClientConfig::from_env()?)?;

    let ping = client.ping()?;
    println!("ping {}: {}", client.url(), ping.status);
    if let Some(role) = ping.result.and_then(|r| r.role) {
        println!("  role: {}", role);
    }

    // Channel listing only when both ends are configured
    if let (Ok(account), Ok(destination)) = (env::var("ACCOUNT"), env::var("DESTINATION")) {
        let outcome = client.get_channels(&account, &destination)?;
        println!("account_channels: {}", outcome.status);
        let channels = outcome.result.and_then(|r| r.channels).unwrap_or_default();
        for channel in channels {
            println!(
                "  {} amount={} balance={} settle_delay={}",
                channel.channel_id, channel.amount, channel.balance, channel.settle_delay
            );
        }
    }

    Ok(())
}
