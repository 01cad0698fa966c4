//! HTTP handlers for the advice session log

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use shared::{AdviceSession, SessionFilters, SessionStats};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::advice_session::{CreateSessionInput, FeedbackInput};
use crate::AppState;

/// Record a new advice session
pub async fn create_session(
    State(state): State<AppState>,
    Json(input): Json<CreateSessionInput>,
) -> (StatusCode, Json<AdviceSession>) {
    let session = state.sessions.create(input).await;
    (StatusCode::CREATED, Json(session))
}

/// List sessions, optionally filtered; newest first
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(filters): Query<SessionFilters>,
) -> Json<Vec<AdviceSession>> {
    Json(state.sessions.filter(&filters).await)
}

/// Get a single session
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<AdviceSession>> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(session))
}

/// Attach farmer feedback to a session
pub async fn add_session_feedback(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<FeedbackInput>,
) -> AppResult<Json<AdviceSession>> {
    let session = state.sessions.add_feedback(session_id, input).await?;
    Ok(Json(session))
}

/// Delete a session
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.sessions.delete(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate statistics over the session log
pub async fn get_session_stats(State(state): State<AppState>) -> Json<SessionStats> {
    Json(state.sessions.stats().await)
}
