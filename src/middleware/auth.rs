use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{verify_token, Claims};
use crate::error::ApiError;
use crate::AppState;

/// Authenticated user context extracted from the bearer token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i64,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { user_id: claims.sub }
    }
}

/// Bearer-token middleware for protected routes.
///
/// Verifies the token and injects [`AuthUser`] into request extensions;
/// handlers treat that id as the authenticated identity for the rest of
/// the request with no further credential check.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)?;

    let claims = verify_token(&token, &state.config.security.jwt_secret).map_err(|e| {
        tracing::debug!("Token verification failed: {}", e);
        ApiError::invalid_token("Token is not valid")
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| ApiError::missing_token("No authentication token provided"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::invalid_token("Invalid Authorization header format"))?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        Some(_) => Err(ApiError::missing_token("No authentication token provided")),
        None => Err(ApiError::invalid_token(
            "Authorization header must use Bearer token format",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_is_missing_token() {
        let err = extract_bearer_token(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ApiError::MissingToken(_)));
    }

    #[test]
    fn bearer_token_is_extracted() {
        let token = extract_bearer_token(&headers_with("Bearer abc.def.ghi")).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn empty_bearer_is_missing_token() {
        let err = extract_bearer_token(&headers_with("Bearer ")).unwrap_err();
        assert!(matches!(err, ApiError::MissingToken(_)));
    }

    #[test]
    fn non_bearer_scheme_is_invalid_token() {
        let err = extract_bearer_token(&headers_with("Basic dXNlcjpwYXNz")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken(_)));
    }
}
