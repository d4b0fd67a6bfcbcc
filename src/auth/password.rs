//! Password hashing and verification.
//!
//! bcrypt with a per-password random salt. The cost factor comes from
//! configuration (default 10); hashing is CPU-bound, so callers on the
//! async runtime run these through `tokio::task::spawn_blocking`.

use bcrypt::{hash, verify, BcryptError};

/// Hash a password for storage. The salt is generated internally and
/// embedded in the returned hash string.
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(password, hashed)
}
