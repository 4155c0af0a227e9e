//! InMemory Session Repository 実装
//!
//! HashMap をセッションストアとして使用します。トークンは UUID v4。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{MemberId, RepositoryError, SessionRepository, SessionToken};

/// インメモリ Session Repository 実装
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionToken, MemberId>>>,
}

impl InMemorySessionRepository {
    /// 新しい InMemorySessionRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 有効なセッション数
    pub async fn count_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, member_id: MemberId) -> Result<SessionToken, RepositoryError> {
        let token = SessionToken::new(uuid::Uuid::new_v4().to_string())
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        self.sessions.write().await.insert(token.clone(), member_id);
        Ok(token)
    }

    async fn invalidate(&self, token: &SessionToken) -> Result<bool, RepositoryError> {
        Ok(self.sessions.write().await.remove(token).is_some())
    }
}
