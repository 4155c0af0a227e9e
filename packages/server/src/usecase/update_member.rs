//! UseCase: 会員情報更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateMemberUseCase::execute() メソッド
//! - パッチに含まれるフィールドのみが上書きされること
//!
//! ### どのような状況を想定しているか
//! - 正常系：一部フィールドの更新、空パッチ
//! - 異常系：存在しない会員 ID（ストアは変更されない）

use std::sync::Arc;

use crate::{
    domain::{Database, MemberId, MemberPatch, Timestamp},
    infrastructure::dto::http::MemberResponse,
};

use super::error::{MemberError, OrInternal};

const OPERATION: &str = "update";

/// 会員情報更新のユースケース
pub struct UpdateMemberUseCase {
    database: Arc<dyn Database>,
}

impl UpdateMemberUseCase {
    /// 新しい UpdateMemberUseCase を作成
    pub fn new(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// 会員情報更新を実行
    ///
    /// # Returns
    ///
    /// * `Ok(MemberResponse)` - 更新後の会員
    /// * `Err(MemberError::NotFound)` - 会員が存在しない
    pub async fn execute(
        &self,
        member_id: MemberId,
        patch: MemberPatch,
    ) -> Result<MemberResponse, MemberError> {
        tracing::info!(%member_id, "[{}] start", OPERATION);

        let mut tx = self.database.begin().await.or_internal(OPERATION)?;

        let mut member = tx
            .members()
            .find_by_id(member_id)
            .await
            .or_internal(OPERATION)?
            .ok_or_else(|| {
                tracing::warn!(%member_id, "[{}] member not found", OPERATION);
                MemberError::not_found(member_id)
            })?;

        if !member.apply_patch(patch, Timestamp::now()) {
            tracing::debug!(%member_id, "[{}] empty patch", OPERATION);
            return Ok(MemberResponse::from(&member));
        }

        let updated = tx
            .members()
            .update(&member)
            .await
            .or_internal(OPERATION)?;
        tx.commit().await.or_internal(OPERATION)?;

        Ok(MemberResponse::from(&updated))
    }
}
