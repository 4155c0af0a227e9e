//! Todolist member service HTTP server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin todolist-server -- --port 8080
//! ```

use clap::Parser;
use todolist_server::ServerConfig;
use todolist_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = todolist_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
