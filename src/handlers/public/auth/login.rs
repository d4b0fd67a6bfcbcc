// POST /auth/login handler

use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::response::ApiResponse;
use crate::services::UserService;
use crate::AppState;

use super::utils::{issue_token, AuthPayload};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /auth/login - Authenticate credentials and issue a session token
///
/// Unknown email and wrong password produce the same error; the response
/// never reveals which field was wrong.
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::validation_error("Email and password are required"));
    }

    let service = UserService::new(state.pool.clone(), state.config.security.bcrypt_cost);
    let user = service.authenticate(&payload.email, &payload.password).await?;

    let token = issue_token(&state, user.id)?;

    Ok((
        [(header::AUTHORIZATION, format!("Bearer {}", token))],
        ApiResponse::success(AuthPayload { user, token }),
    ))
}
