//! Domain layer for the member service.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Member, MemberPatch, NewMember, Todo};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::{Database, MemberRepository, SessionRepository, TodoRepository, UnitOfWork};
pub use value_object::{Email, MemberId, SessionToken, Timestamp};
