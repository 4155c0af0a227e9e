//! UseCase 層
//!
//! 会員サービスの各操作を実装するレイヤー。
//! UI 層から呼び出され、Domain 層の Repository trait を通じてストアを操作します。
//! 各操作は1つのトランザクション（UnitOfWork）内で完結します。

pub mod delete_member;
pub mod error;
pub mod find_member;
pub mod join_member;
pub mod login_member;
pub mod logout_member;
pub mod update_member;

#[cfg(test)]
pub(crate) mod testing;

pub use delete_member::DeleteMemberUseCase;
pub use error::{MemberError, MemberLookup};
pub use find_member::{FindAllMembersUseCase, FindMemberUseCase};
pub use join_member::{JoinMember, JoinMemberUseCase};
pub use login_member::LoginMemberUseCase;
pub use logout_member::LogoutMemberUseCase;
pub use update_member::UpdateMemberUseCase;
