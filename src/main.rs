//! GrubDash server binary
//!
//! Configuration comes from the YAML file named by `GRUBDASH_CONFIG`, with
//! `GRUBDASH_BIND` overriding the bind address. `RUST_LOG` takes precedence
//! over the configured log level.

use anyhow::{Context, Result};
use grubdash::config::AppConfig;
use grubdash::server::ServerBuilder;
use grubdash::storage::SeedData;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let mut builder = ServerBuilder::new();
    if let Some(path) = &config.seed_file {
        let seed = SeedData::from_json_file(path)
            .with_context(|| format!("failed to load seed file {}", path))?;
        builder = builder.with_seed(seed);
    }

    tracing::info!("🚀 Starting GrubDash on http://{}", config.bind_address);
    builder.serve(&config.bind_address).await
}
