//! Delivery Hub entry point
//!
//! Loads config/{env}.yaml, initializes logging, connects to
//! PostgreSQL, applies migrations, and starts the HTTP gateway.

use std::sync::Arc;

use anyhow::Context;

use delivery_hub::config::AppConfig;
use delivery_hub::db::Database;
use delivery_hub::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = logging::init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %env,
        "Delivery Hub starting"
    );

    let db = Database::connect(&config.postgres_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    db.run_migrations()
        .await
        .context("Failed to apply schema migrations")?;

    let port = get_port_override().unwrap_or(config.server.port);
    gateway::run_server(config, port, Arc::new(db)).await;

    Ok(())
}
