use serde::Serialize;

use crate::auth::{generate_token, Claims};
use crate::database::models::PublicUser;
use crate::error::ApiError;
use crate::AppState;

/// Body of a successful register/login response
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: PublicUser,
    pub token: String,
}

/// Sign a session token for the given user id using the configured secret
/// and expiry window.
pub fn issue_token(state: &AppState, user_id: i64) -> Result<String, ApiError> {
    let security = &state.config.security;
    let claims = Claims::new(user_id, security.token_expiry_hours);

    generate_token(&claims, &security.jwt_secret).map_err(|e| {
        tracing::error!("Token generation failed: {}", e);
        ApiError::internal_server_error("An error occurred while processing your request")
    })
}

/// Basic email format check
pub fn validate_email_format(email: &str) -> Result<(), ApiError> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return Err(ApiError::validation_error("Invalid email format"));
    }
    Ok(())
}
