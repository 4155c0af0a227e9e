//! UseCase: 会員削除処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DeleteMemberUseCase::execute() メソッド
//! - 存在確認 → Todo 削除 → 会員削除 の順序と、同一トランザクションでの実行
//!
//! ### なぜこのテストが必要か
//! - 存在しない会員の削除では Todo を含め一切書き込まない
//! - 途中で失敗した場合は Todo の削除も commit されない
//!
//! ### どのような状況を想定しているか
//! - 正常系：Todo を持つ会員の削除
//! - 異常系：存在しない会員 ID、会員削除時のストア障害

use std::sync::Arc;

use crate::{
    domain::{Database, MemberId},
    infrastructure::dto::http::DELETE_SUCCESS,
};

use super::error::{MemberError, OrInternal};

const OPERATION: &str = "delete";

/// 会員削除のユースケース
pub struct DeleteMemberUseCase {
    database: Arc<dyn Database>,
}

impl DeleteMemberUseCase {
    /// 新しい DeleteMemberUseCase を作成
    pub fn new(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// 会員削除を実行
    ///
    /// # Returns
    ///
    /// * `Ok("SUCCESS")` - 会員と所有する Todo を削除した
    /// * `Err(MemberError::NotFound)` - 会員が存在しない（何も削除しない）
    pub async fn execute(&self, member_id: MemberId) -> Result<&'static str, MemberError> {
        tracing::info!(%member_id, "[{}] start", OPERATION);

        let mut tx = self.database.begin().await.or_internal(OPERATION)?;

        // 1. 存在確認
        let exists = tx
            .members()
            .find_by_id(member_id)
            .await
            .or_internal(OPERATION)?
            .is_some();
        if !exists {
            tracing::warn!(%member_id, "[{}] member not found", OPERATION);
            return Err(MemberError::not_found(member_id));
        }

        // 2. 所有する Todo を削除
        let deleted_todos = tx
            .todos()
            .delete_all_by_member_id(member_id)
            .await
            .or_internal(OPERATION)?;

        // 3. 会員を削除
        tx.members()
            .delete_by_id(member_id)
            .await
            .or_internal(OPERATION)?;

        tx.commit().await.or_internal(OPERATION)?;

        tracing::info!(%member_id, deleted_todos, "[{}] member deleted", OPERATION);
        Ok(DELETE_SUCCESS)
    }
}
