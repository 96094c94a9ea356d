//! Taskboard server -- minimal in-memory to-do task HTTP API.
//!
//! An axum HTTP server exposing CRUD operations over an in-memory task
//! collection. State lives for the process lifetime only; nothing is
//! persisted.
//!
//! # Usage
//!
//! ```bash
//! # Run on default address 0.0.0.0:8080
//! cargo run --bin taskboard
//!
//! # Run on custom address
//! cargo run --bin taskboard -- --bind 127.0.0.1:3000
//!
//! # Or via environment variable
//! TASKBOARD_ADDR=127.0.0.1:3000 cargo run --bin taskboard
//! ```

use std::sync::Arc;

use clap::Parser;
use taskboard::api;
use taskboard::config::{CliArgs, Config};
use taskboard::store::TaskStore;

#[tokio::main]
async fn main() {
    let cli = CliArgs::parse();

    // Load config from CLI args + config file + env vars + defaults.
    let config = match Config::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    // Initialize tracing with the resolved log level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(addr = %config.bind_addr, "starting taskboard server");

    let store = Arc::new(TaskStore::new());

    match api::start_server_with_state(&config.bind_addr, store).await {
        Ok((bound_addr, handle)) => {
            tracing::info!(addr = %bound_addr, "taskboard server listening");
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "taskboard server task failed");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to start taskboard server");
            std::process::exit(1);
        }
    }
}
