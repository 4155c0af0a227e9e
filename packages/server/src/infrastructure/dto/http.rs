//! HTTP API request/response DTOs for the member service.

use serde::{Deserialize, Serialize};
use todolist_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{Member, MemberPatch};

/// Literal result of a successful member deletion
pub const DELETE_SUCCESS: &str = "SUCCESS";

/// Join request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Update request body; omitted fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<UpdateRequest> for MemberPatch {
    fn from(request: UpdateRequest) -> Self {
        MemberPatch {
            password: request.password,
            name: request.name,
            phone: request.phone,
        }
    }
}

/// Member view returned by join, login, update and find-one.
/// The password is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub created_at: String, // ISO 8601
    pub updated_at: String, // ISO 8601
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.value(),
            email: member.email.as_str().to_string(),
            name: member.name.clone(),
            phone: member.phone.clone(),
            created_at: timestamp_to_jst_rfc3339(member.created_at.value()),
            updated_at: timestamp_to_jst_rfc3339(member.updated_at.value()),
        }
    }
}

/// Login response: the issued session and the member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub member: MemberResponse,
}

/// Logout confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub id: i64,
    pub email: String,
}

impl From<&Member> for LogoutResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.value(),
            email: member.email.as_str().to_string(),
        }
    }
}

/// All members, each wrapped individually
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberResponse>,
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub result: String,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}
