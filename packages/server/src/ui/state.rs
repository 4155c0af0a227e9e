//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{Database, SessionRepository},
    infrastructure::repository::{InMemoryDatabase, InMemorySessionRepository},
};

/// Shared application state
pub struct AppState {
    /// Store（データアクセス層の抽象化）
    pub database: Arc<dyn Database>,
    /// Login sessions
    pub sessions: Arc<dyn SessionRepository>,
}

impl AppState {
    pub fn new(database: Arc<dyn Database>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { database, sessions }
    }

    /// State backed by the in-memory store and session repository
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryDatabase::new()),
            Arc::new(InMemorySessionRepository::new()),
        )
    }
}
