//! UseCase: 会員登録処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinMemberUseCase::execute() メソッド
//! - email の重複チェックと会員の保存
//!
//! ### なぜこのテストが必要か
//! - email は会員の一意なビジネスキーであり、重複登録を防ぐ必要がある
//! - 事前チェックをすり抜けた重複も Repository の一意制約で DuplicateEmail になることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新しい email での登録
//! - 異常系：登録済み email での登録、ストア障害

use std::sync::Arc;

use crate::{
    domain::{Database, Email, NewMember, RepositoryError, Timestamp, ValueObjectError},
    infrastructure::dto::http::{JoinRequest, MemberResponse},
};

use super::error::{MemberError, OrInternal};

const OPERATION: &str = "join";

/// 会員登録の入力
#[derive(Debug, Clone)]
pub struct JoinMember {
    pub email: Email,
    pub password: String,
    pub name: String,
    pub phone: String,
}

impl TryFrom<JoinRequest> for JoinMember {
    type Error = ValueObjectError;

    fn try_from(request: JoinRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            email: Email::new(request.email)?,
            password: request.password,
            name: request.name,
            phone: request.phone,
        })
    }
}

/// 会員登録のユースケース
pub struct JoinMemberUseCase {
    database: Arc<dyn Database>,
}

impl JoinMemberUseCase {
    /// 新しい JoinMemberUseCase を作成
    pub fn new(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// 会員登録を実行
    ///
    /// # Returns
    ///
    /// * `Ok(MemberResponse)` - 登録された会員
    /// * `Err(MemberError::DuplicateEmail)` - email が登録済み
    /// * `Err(MemberError::Internal)` - ストア障害
    pub async fn execute(&self, command: JoinMember) -> Result<MemberResponse, MemberError> {
        tracing::info!(email = %command.email, "[{}] start", OPERATION);

        let mut tx = self.database.begin().await.or_internal(OPERATION)?;

        // 1. 重複チェック
        let existing = tx
            .members()
            .find_by_email(&command.email)
            .await
            .or_internal(OPERATION)?;
        if existing.is_some() {
            tracing::warn!(email = %command.email, "[{}] duplicate email", OPERATION);
            return Err(MemberError::DuplicateEmail(command.email.into_string()));
        }

        // 2. 保存（一意制約違反も DuplicateEmail として扱う）
        let new_member = NewMember::new(
            command.email,
            command.password,
            command.name,
            command.phone,
            Timestamp::now(),
        );
        let member = tx
            .members()
            .save(new_member)
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateEmail(email) => {
                    tracing::warn!(%email, "[{}] unique constraint violated", OPERATION);
                    MemberError::DuplicateEmail(email)
                }
                other => MemberError::internal(OPERATION, other),
            })?;

        tx.commit().await.or_internal(OPERATION)?;

        tracing::info!(member_id = %member.id, "[{}] member joined", OPERATION);
        Ok(MemberResponse::from(&member))
    }
}
