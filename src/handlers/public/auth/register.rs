// POST /auth/register handler

use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::response::ApiResponse;
use crate::services::UserService;
use crate::AppState;

use super::utils::{issue_token, validate_email_format, AuthPayload};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// POST /auth/register - Register a new user account
///
/// Creates the user, then issues a session token so the client is logged
/// in immediately. The token is returned in the body and echoed in an
/// `Authorization` response header.
pub async fn register_post(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.email.trim().is_empty()
        || payload.password.is_empty()
        || payload.name.trim().is_empty()
    {
        return Err(ApiError::validation_error(
            "Email, password and name are required",
        ));
    }
    validate_email_format(&payload.email)?;

    let service = UserService::new(state.pool.clone(), state.config.security.bcrypt_cost);
    let user = service
        .register(&payload.email, &payload.password, &payload.name)
        .await?;

    let token = issue_token(&state, user.id)?;

    Ok((
        [(header::AUTHORIZATION, format!("Bearer {}", token))],
        ApiResponse::created(AuthPayload { user, token }),
    ))
}
