//! HTTP server for the member service.

pub mod error;
mod extract;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{router, run};
