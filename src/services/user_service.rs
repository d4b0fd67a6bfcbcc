//! Credential store: user registration and password authentication.

use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::auth::password::{hash_password, verify_password};
use crate::database::models::{PublicUser, User};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User already exists")]
    DuplicateUser,

    /// Covers both unknown email and wrong password; callers must not be
    /// able to tell which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub struct UserService {
    pool: PgPool,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(pool: PgPool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// Create a new user account.
    ///
    /// Email uniqueness is checked before the insert; the password is
    /// stored only as a salted bcrypt hash. Returns the public record,
    /// never the hash.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<PublicUser, UserError> {
        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(UserError::DuplicateUser);
        }

        let password_hash = Self::hash_blocking(password.to_string(), self.bcrypt_cost).await?;

        let user = sqlx::query_as::<_, PublicUser>(
            "INSERT INTO users (email, password_hash, name) VALUES ($1, $2, $3) \
             RETURNING id, email, name",
        )
        .bind(email)
        .bind(&password_hash)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        info!(user_id = user.id, "Registered new user");
        Ok(user)
    }

    /// Verify credentials and return the matching user.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<PublicUser, UserError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(UserError::InvalidCredentials)?;

        let matches =
            Self::verify_blocking(password.to_string(), user.password_hash.clone()).await?;

        if !matches {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.into())
    }

    // bcrypt is CPU-bound; keep it off the async executor.
    async fn hash_blocking(password: String, cost: u32) -> Result<String, UserError> {
        tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| UserError::Hash(e.to_string()))?
            .map_err(|e| UserError::Hash(e.to_string()))
    }

    async fn verify_blocking(password: String, hash: String) -> Result<bool, UserError> {
        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| UserError::Hash(e.to_string()))?
            .map_err(|e| UserError::Hash(e.to_string()))
    }
}
