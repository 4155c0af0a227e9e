//! UseCase: ログイン処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LoginMemberUseCase::execute() メソッド
//! - email による会員検索とパスワード照合（完全一致）
//!
//! ### どのような状況を想定しているか
//! - 正常系：正しい email とパスワード
//! - 異常系：存在しない email（NotFound）、誤ったパスワード（InvalidCredentials）

use std::sync::Arc;

use crate::{
    domain::{Database, Email},
    infrastructure::dto::http::MemberResponse,
};

use super::error::{MemberError, OrInternal};

const OPERATION: &str = "login";

/// ログインのユースケース
///
/// セッションの発行は呼び出し側（UI 層）の責務。
pub struct LoginMemberUseCase {
    database: Arc<dyn Database>,
}

impl LoginMemberUseCase {
    /// 新しい LoginMemberUseCase を作成
    pub fn new(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// ログインを実行
    ///
    /// # Returns
    ///
    /// * `Ok(MemberResponse)` - 認証された会員
    /// * `Err(MemberError::NotFound)` - email が未登録
    /// * `Err(MemberError::InvalidCredentials)` - パスワード不一致
    pub async fn execute(
        &self,
        email: Email,
        password: &str,
    ) -> Result<MemberResponse, MemberError> {
        tracing::info!(%email, "[{}] start", OPERATION);

        let mut tx = self.database.begin().await.or_internal(OPERATION)?;

        let member = tx
            .members()
            .find_by_email(&email)
            .await
            .or_internal(OPERATION)?
            .ok_or_else(|| {
                tracing::warn!(%email, "[{}] email not found", OPERATION);
                MemberError::not_found(&email)
            })?;

        if !member.password_matches(password) {
            tracing::warn!(member_id = %member.id, "[{}] password mismatch", OPERATION);
            return Err(MemberError::InvalidCredentials);
        }

        Ok(MemberResponse::from(&member))
    }
}
