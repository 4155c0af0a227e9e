//! Repository traits (ports)
//!
//! The domain layer defines these interfaces; the infrastructure layer
//! implements them (dependency inversion). Every member-service operation
//! runs inside one `UnitOfWork` obtained from a `Database`.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{
    entity::{Member, NewMember},
    error::RepositoryError,
    value_object::{Email, MemberId, SessionToken},
};

/// Member persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MemberRepository: Send {
    async fn find_by_id(&mut self, id: MemberId) -> Result<Option<Member>, RepositoryError>;

    async fn find_by_email(&mut self, email: &Email) -> Result<Option<Member>, RepositoryError>;

    /// All members, ordered by id
    async fn find_all(&mut self) -> Result<Vec<Member>, RepositoryError>;

    /// Insert a new member; the store assigns the id.
    ///
    /// # Errors
    ///
    /// `RepositoryError::DuplicateEmail` if the email is already stored
    async fn save(&mut self, member: NewMember) -> Result<Member, RepositoryError>;

    /// Overwrite an existing member row
    async fn update(&mut self, member: &Member) -> Result<Member, RepositoryError>;

    async fn delete_by_id(&mut self, id: MemberId) -> Result<(), RepositoryError>;
}

/// To-do persistence, as consumed by the member service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TodoRepository: Send {
    /// Delete every to-do item owned by the member
    ///
    /// # Returns
    ///
    /// Number of deleted items
    async fn delete_all_by_member_id(&mut self, member_id: MemberId)
    -> Result<u64, RepositoryError>;
}

/// Transaction scope over the member and to-do tables
///
/// Writes become visible on `commit`. Dropping without commit rolls back.
#[async_trait]
pub trait UnitOfWork: Send {
    fn members(&mut self) -> &mut dyn MemberRepository;

    fn todos(&mut self) -> &mut dyn TodoRepository;

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;
}

/// Entry point of the store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Send + Sync {
    /// Open a new transaction scope
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepositoryError>;
}

/// Login sessions, keyed by an explicit token
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Issue a new session for the member
    async fn create(&self, member_id: MemberId) -> Result<SessionToken, RepositoryError>;

    /// End the session. Unknown tokens are a no-op.
    ///
    /// # Returns
    ///
    /// `true` if a live session was removed
    async fn invalidate(&self, token: &SessionToken) -> Result<bool, RepositoryError>;
}
