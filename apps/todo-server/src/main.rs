//! To-Do Server binary.

use std::net::SocketAddr;

use todo_server::{config::Config, create_app, create_state, init_tracing};
use todo_store::SqliteTodoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(database_url = %config.database_url, "Starting To-Do Server");

    // Open the store; the database file and schema are created if missing
    let store = SqliteTodoStore::connect(&config.database_url).await?;

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
