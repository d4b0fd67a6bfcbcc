use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::database::models::Note;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::{NoteDraft, NoteService};
use crate::AppState;

// A note that exists but belongs to someone else responds exactly like a
// note that does not exist: 404, handled inside the service queries.

/// GET /api/notes/:id - show a single owned note
pub async fn get(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<Note> {
    let note = NoteService::new(state.pool.clone())
        .get(auth_user.user_id, id)
        .await?;

    Ok(ApiResponse::success(note))
}

/// PUT /api/notes/:id - replace the content fields of an owned note
pub async fn put(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(draft): Json<NoteDraft>,
) -> ApiResult<Note> {
    let note = NoteService::new(state.pool.clone())
        .update(auth_user.user_id, id, &draft)
        .await?;

    Ok(ApiResponse::success(note))
}

/// DELETE /api/notes/:id - hard delete an owned note
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    NoteService::new(state.pool.clone())
        .delete(auth_user.user_id, id)
        .await?;

    Ok(ApiResponse::<()>::no_content())
}
