//! UseCase: ログアウト処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LogoutMemberUseCase::execute() メソッド
//! - 呼び出し元セッションの無効化と会員の存在確認
//!
//! ### なぜこのテストが必要か
//! - セッションは会員の存在確認より先に無効化される
//!   （存在しない会員 ID でもセッションは残らない）
//! - セッションが無い場合も会員が存在すれば成功する
//!
//! ### どのような状況を想定しているか
//! - 正常系：セッションあり / なし
//! - 異常系：存在しない会員 ID、セッションストア障害

use std::sync::Arc;

use crate::{
    domain::{Database, MemberId, SessionRepository, SessionToken},
    infrastructure::dto::http::LogoutResponse,
};

use super::error::{MemberError, OrInternal};

const OPERATION: &str = "logout";

/// ログアウトのユースケース
pub struct LogoutMemberUseCase {
    database: Arc<dyn Database>,
    sessions: Arc<dyn SessionRepository>,
}

impl LogoutMemberUseCase {
    /// 新しい LogoutMemberUseCase を作成
    pub fn new(database: Arc<dyn Database>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self { database, sessions }
    }

    /// ログアウトを実行
    ///
    /// # Arguments
    ///
    /// * `session` - 呼び出し元のセッション（無ければ無効化は行わない）
    /// * `member_id` - ログアウトする会員の ID
    ///
    /// # Returns
    ///
    /// * `Ok(LogoutResponse)` - ログアウトした会員
    /// * `Err(MemberError::NotFound)` - 会員が存在しない
    pub async fn execute(
        &self,
        session: Option<SessionToken>,
        member_id: MemberId,
    ) -> Result<LogoutResponse, MemberError> {
        tracing::info!(%member_id, "[{}] start", OPERATION);

        // 1. セッション無効化
        if let Some(token) = session {
            let removed = self
                .sessions
                .invalidate(&token)
                .await
                .or_internal(OPERATION)?;
            tracing::debug!(removed, "[{}] session invalidated", OPERATION);
        }

        // 2. 会員の存在確認
        let mut tx = self.database.begin().await.or_internal(OPERATION)?;
        let member = tx
            .members()
            .find_by_id(member_id)
            .await
            .or_internal(OPERATION)?
            .ok_or_else(|| {
                tracing::warn!(%member_id, "[{}] member not found", OPERATION);
                MemberError::not_found(member_id)
            })?;

        Ok(LogoutResponse::from(&member))
    }
}
