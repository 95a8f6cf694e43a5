//! Task list server binary.

use std::net::SocketAddr;

use task_server::{config::Config, create_app, create_state, init_tracing};
use task_store::PgTaskStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(db_host = %config.db.host, db_name = %config.db.name, "Starting task list server");

    // Connect the task store (pool + schema bootstrap)
    let store = PgTaskStore::connect(&config.db).await?;

    // Create application state
    let state = create_state(config.clone(), store);

    // Create application router
    let app = create_app(state);

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
