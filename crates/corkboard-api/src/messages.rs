use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::error;

use corkboard_db::models::MessageRow;
use corkboard_types::api::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};

use crate::AppState;
use crate::error::ApiError;

fn to_response(row: MessageRow) -> MessageResponse {
    MessageResponse {
        id: row.id,
        content: row.content,
        username: row.username,
    }
}

fn join_error(err: tokio::task::JoinError) -> ApiError {
    error!("spawn_blocking join error: {}", err);
    ApiError::Storage("internal server error".into())
}

pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    // Run blocking DB work off the async runtime
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_messages())
        .await
        .map_err(join_error)??;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

pub async fn create_message(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Presence check happens before the store is touched
    let (content, username) = req.validate().map_err(|_| ApiError::Validation)?;

    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || db.db.insert_message(&content, &username))
        .await
        .map_err(join_error)??;

    Ok((StatusCode::CREATED, Json(to_response(row))))
}

pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || db.db.update_message(id, req.content.as_deref()))
        .await
        .map_err(join_error)??;

    Ok(Json(to_response(row)))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.delete_message(id))
        .await
        .map_err(join_error)??;

    Ok(StatusCode::NO_CONTENT)
}
