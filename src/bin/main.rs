use anyhow::Context;
use agora::config::DEFAULT_LOG_FILTER;
use agora::{seed_demo_data, GraphConfig, Network};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = GraphConfig::from_env();
    tracing::info!(?config, "starting demo session");

    let mut network = Network::with_config(config);
    let demo = seed_demo_data(&mut network).context("demo session failed")?;

    for id in [demo.john, demo.jane] {
        let snapshot = network.snapshot(id)?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
