//! UseCase: 会員検索処理（1件 / 全件）

use std::sync::Arc;

use crate::{
    domain::{Database, MemberId},
    infrastructure::dto::http::{MemberListResponse, MemberResponse},
};

use super::error::{MemberError, OrInternal};

/// 会員1件取得のユースケース
pub struct FindMemberUseCase {
    database: Arc<dyn Database>,
}

impl FindMemberUseCase {
    const OPERATION: &'static str = "findOne";

    /// 新しい FindMemberUseCase を作成
    pub fn new(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// ID で会員を取得
    ///
    /// # Returns
    ///
    /// * `Ok(MemberResponse)` - 会員
    /// * `Err(MemberError::NotFound)` - 会員が存在しない
    pub async fn execute(&self, member_id: MemberId) -> Result<MemberResponse, MemberError> {
        tracing::info!(%member_id, "[{}] start", Self::OPERATION);

        let mut tx = self.database.begin().await.or_internal(Self::OPERATION)?;
        let member = tx
            .members()
            .find_by_id(member_id)
            .await
            .or_internal(Self::OPERATION)?
            .ok_or_else(|| {
                tracing::warn!(%member_id, "[{}] member not found", Self::OPERATION);
                MemberError::not_found(member_id)
            })?;

        Ok(MemberResponse::from(&member))
    }
}

/// 会員全件取得のユースケース
pub struct FindAllMembersUseCase {
    database: Arc<dyn Database>,
}

impl FindAllMembersUseCase {
    const OPERATION: &'static str = "findAll";

    /// 新しい FindAllMembersUseCase を作成
    pub fn new(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// 全会員を ID 順で取得（0件でも成功）
    pub async fn execute(&self) -> Result<MemberListResponse, MemberError> {
        tracing::info!("[{}] start", Self::OPERATION);

        let mut tx = self.database.begin().await.or_internal(Self::OPERATION)?;
        let members = tx
            .members()
            .find_all()
            .await
            .or_internal(Self::OPERATION)?;

        Ok(MemberListResponse {
            members: members.iter().map(MemberResponse::from).collect(),
        })
    }
}
