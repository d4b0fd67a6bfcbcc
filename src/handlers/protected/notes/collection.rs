use axum::{extract::State, Extension, Json};

use crate::database::models::Note;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::{NoteDraft, NoteService};
use crate::AppState;

/// GET /api/notes - list the caller's notes, newest-created-first
pub async fn get(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Vec<Note>> {
    let notes = NoteService::new(state.pool.clone())
        .list(auth_user.user_id)
        .await?;

    Ok(ApiResponse::success(notes))
}

/// POST /api/notes - create a note owned by the caller
pub async fn post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(draft): Json<NoteDraft>,
) -> ApiResult<Note> {
    let note = NoteService::new(state.pool.clone())
        .create(auth_user.user_id, &draft)
        .await?;

    Ok(ApiResponse::created(note))
}
