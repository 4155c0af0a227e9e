//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of an email address (RFC 5321 path limit)
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Member identifier value object.
///
/// Surrogate key assigned by the store. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(i64);

impl MemberId {
    /// Create a new MemberId.
    ///
    /// # Arguments
    ///
    /// * `id` - The numeric identifier
    ///
    /// # Returns
    ///
    /// A Result containing the MemberId or an error if the value is not positive
    pub fn new(id: i64) -> Result<Self, ValueObjectError> {
        if id <= 0 {
            return Err(ValueObjectError::MemberIdNotPositive(id));
        }
        Ok(Self(id))
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for MemberId {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email value object.
///
/// The unique business key of a member. Surrounding whitespace is trimmed;
/// comparison is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new Email.
    ///
    /// # Arguments
    ///
    /// * `email` - The email address string
    ///
    /// # Returns
    ///
    /// A Result containing the Email or an error if validation fails
    pub fn new(email: String) -> Result<Self, ValueObjectError> {
        let email = email.trim().to_string();
        if email.is_empty() {
            return Err(ValueObjectError::EmailEmpty);
        }
        let len = email.chars().count();
        if len > EMAIL_MAX_LENGTH {
            return Err(ValueObjectError::EmailTooLong {
                max: EMAIL_MAX_LENGTH,
                actual: len,
            });
        }
        let well_formed = matches!(
            email.split_once('@'),
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        );
        if !well_formed {
            return Err(ValueObjectError::EmailInvalidFormat(email));
        }
        Ok(Self(email))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session token value object.
///
/// Opaque handle identifying a login session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a new SessionToken.
    pub fn new(token: String) -> Result<Self, ValueObjectError> {
        if token.trim().is_empty() {
            return Err(ValueObjectError::SessionTokenEmpty);
        }
        Ok(Self(token))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (JST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(todolist_shared::time::get_jst_timestamp())
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
