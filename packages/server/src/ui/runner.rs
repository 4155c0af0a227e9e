//! Router construction and server entry point.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::ServerConfig, error::ServerError};

use super::{
    handler::{
        delete_member, find_all_members, find_member, health_check, join_member, login_member,
        logout_member, update_member,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Build the HTTP router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/members", get(find_all_members).post(join_member))
        .route("/api/members/login", post(login_member))
        .route(
            "/api/members/{member_id}",
            get(find_member).patch(update_member).delete(delete_member),
        )
        .route("/api/members/{member_id}/logout", post(logout_member))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server with the in-memory store until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
    tracing::info!("Todolist server listening on http://{}", address);

    let state = Arc::new(AppState::in_memory());
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
