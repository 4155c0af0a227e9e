//! UseCase 層のエラー定義

use std::fmt;

use thiserror::Error;

use crate::domain::{Email, MemberId, RepositoryError};

/// How a missing member was looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberLookup {
    Id(MemberId),
    Email(String),
}

impl fmt::Display for MemberLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberLookup::Id(id) => write!(f, "id={}", id),
            MemberLookup::Email(email) => write!(f, "email={}", email),
        }
    }
}

impl From<MemberId> for MemberLookup {
    fn from(id: MemberId) -> Self {
        MemberLookup::Id(id)
    }
}

impl From<&Email> for MemberLookup {
    fn from(email: &Email) -> Self {
        MemberLookup::Email(email.as_str().to_string())
    }
}

/// Failures of the member-service operations
///
/// Typed failures pass through untouched; any other fault is wrapped into
/// `Internal` at the operation boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemberError {
    /// Email is already registered
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// No member for the given email or id
    #[error("Member not found ({0})")]
    NotFound(MemberLookup),

    /// Password does not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unexpected fault, tagged with the failing operation
    #[error("Internal error in {operation}: {message}")]
    Internal {
        operation: &'static str,
        message: String,
    },
}

impl MemberError {
    /// Wrap an unexpected fault
    pub fn internal(operation: &'static str, cause: impl fmt::Display) -> Self {
        tracing::error!(operation, "Unexpected fault: {}", cause);
        MemberError::Internal {
            operation,
            message: cause.to_string(),
        }
    }

    pub fn not_found(lookup: impl Into<MemberLookup>) -> Self {
        MemberError::NotFound(lookup.into())
    }
}

/// Convert store results into `MemberError::Internal` at the operation boundary
pub(crate) trait OrInternal<T> {
    fn or_internal(self, operation: &'static str) -> Result<T, MemberError>;
}

impl<T> OrInternal<T> for Result<T, RepositoryError> {
    fn or_internal(self, operation: &'static str) -> Result<T, MemberError> {
        self.map_err(|e| MemberError::internal(operation, e))
    }
}
