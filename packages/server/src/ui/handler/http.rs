//! HTTP API endpoint handlers.
//!
//! Handlers convert request DTOs into domain values, call one use case and
//! map its failure through `ApiError`.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::{
    domain::{Email, MemberId, MemberPatch, SessionToken},
    infrastructure::dto::http::{
        DeleteResponse, JoinRequest, LoginRequest, LoginResponse, LogoutResponse,
        MemberListResponse, MemberResponse, UpdateRequest,
    },
    ui::{
        error::ApiError,
        extract::{JsonBody, PathParam},
        state::AppState,
    },
    usecase::{
        DeleteMemberUseCase, FindAllMembersUseCase, FindMemberUseCase, JoinMember,
        JoinMemberUseCase, LoginMemberUseCase, LogoutMemberUseCase, MemberError,
        UpdateMemberUseCase,
    },
};

/// Header carrying the caller's session token
pub const SESSION_HEADER: &str = "x-session-token";

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Register a new member
pub async fn join_member(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<JoinRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let command = JoinMember::try_from(request)?;
    let response = JoinMemberUseCase::new(state.database.clone())
        .execute(command)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Authenticate and open a session
pub async fn login_member(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = Email::new(request.email)?;
    let member = LoginMemberUseCase::new(state.database.clone())
        .execute(email, &request.password)
        .await?;

    let member_id = MemberId::new(member.id).map_err(|e| MemberError::internal("login", e))?;
    let token = state
        .sessions
        .create(member_id)
        .await
        .map_err(|e| MemberError::internal("login", e))?;
    tracing::info!(%member_id, "Session opened");

    Ok(Json(LoginResponse {
        session_token: token.as_str().to_string(),
        member,
    }))
}

/// End the caller's session
pub async fn logout_member(
    State(state): State<Arc<AppState>>,
    PathParam(member_id): PathParam<i64>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    let member_id = MemberId::new(member_id)?;
    let session = session_token(&headers);
    let response = LogoutMemberUseCase::new(state.database.clone(), state.sessions.clone())
        .execute(session, member_id)
        .await?;
    Ok(Json(response))
}

/// List all members
pub async fn find_all_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MemberListResponse>, ApiError> {
    let response = FindAllMembersUseCase::new(state.database.clone())
        .execute()
        .await?;
    Ok(Json(response))
}

/// Get one member by id
pub async fn find_member(
    State(state): State<Arc<AppState>>,
    PathParam(member_id): PathParam<i64>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member_id = MemberId::new(member_id)?;
    let response = FindMemberUseCase::new(state.database.clone())
        .execute(member_id)
        .await?;
    Ok(Json(response))
}

/// Partially update a member profile
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    PathParam(member_id): PathParam<i64>,
    JsonBody(request): JsonBody<UpdateRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member_id = MemberId::new(member_id)?;
    let response = UpdateMemberUseCase::new(state.database.clone())
        .execute(member_id, MemberPatch::from(request))
        .await?;
    Ok(Json(response))
}

/// Delete a member and its to-do items
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    PathParam(member_id): PathParam<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let member_id = MemberId::new(member_id)?;
    let result = DeleteMemberUseCase::new(state.database.clone())
        .execute(member_id)
        .await?;
    Ok(Json(DeleteResponse {
        result: result.to_string(),
    }))
}

/// Session token from the request headers; absent or blank means no session
fn session_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| SessionToken::new(value.trim().to_string()).ok())
}
