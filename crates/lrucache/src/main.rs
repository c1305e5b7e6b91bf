//! LRU Cache - interactive shell over an in-process LRU cache

use anyhow::{Context, Result};
use clap::Parser;
use lrucache_core::LruCache;
use std::io;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod shell;

use config::{Config, LoggingConfig};

/// LRU Cache - drive an in-process LRU cache from stdin
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Maximum number of entries (overrides the config file)
    #[arg(long, env = "LRUCACHE_CAPACITY", allow_negative_numbers = true)]
    capacity: Option<i64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = Config::load(&args.config)?;
    let from_file = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(capacity) = args.capacity {
        config.cache.capacity = capacity;
    }

    init_logging(&config.logging);

    info!("Starting LRU Cache v{}", env!("CARGO_PKG_VERSION"));
    if from_file {
        info!("Loaded configuration from {}", args.config);
    } else {
        info!("Config file not found at {}, using defaults", args.config);
    }

    let cache: LruCache<String> =
        LruCache::from_config(&config.cache).context("Failed to create cache")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&cache, stdin.lock(), stdout.lock())?;

    info!("Shell closed");
    Ok(())
}

/// Initialize logging
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Logs go to stderr so they never interleave with shell responses
    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}
