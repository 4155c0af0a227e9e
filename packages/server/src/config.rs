//! Command-line configuration for the server binary.

use clap::Parser;

/// Todolist member service HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "todolist-server", version, about)]
pub struct ServerConfig {
    /// Host address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
