//! InMemory 実装

pub mod database;
pub mod session;

pub use database::InMemoryDatabase;
pub use session::InMemorySessionRepository;
