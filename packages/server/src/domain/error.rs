//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::MemberId;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// MemberId must be positive
    #[error("MemberId must be positive (got {0})")]
    MemberIdNotPositive(i64),

    /// Email validation error
    #[error("Email cannot be empty")]
    EmailEmpty,

    /// Email too long error
    #[error("Email cannot exceed {max} characters (got {actual})")]
    EmailTooLong { max: usize, actual: usize },

    /// Email invalid format error
    #[error("Email must contain a single '@' between non-empty parts (got: {0})")]
    EmailInvalidFormat(String),

    /// SessionToken validation error
    #[error("SessionToken cannot be empty")]
    SessionTokenEmpty,
}

/// Errors raised by store ports (repositories, transactions, sessions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Unique constraint on member email violated
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// Row targeted by a write does not exist
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// Backend failure (connection, I/O, poisoned state)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
