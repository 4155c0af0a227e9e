//! Member service for the Todolist application.
//!
//! Layered as domain (entities, value objects, repository ports),
//! usecase (member join/login/logout/update/delete/find),
//! infrastructure (in-memory store, DTOs) and ui (axum HTTP server).

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
