use crate::error::AppError;
use bcrypt::{hash, verify};

/// bcrypt work factor. Each call also draws a fresh salt.
const HASH_COST: u32 = 10;

/// Hashes `password` on the blocking thread pool.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash(password, HASH_COST))
        .await
        .map_err(|e| AppError::internal("Failed to hash password", e))?
        .map_err(AppError::from)
}

/// Checks `password` against a stored bcrypt digest on the blocking thread pool.
pub async fn verify_password(password: String, hashed_password: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify(password, &hashed_password))
        .await
        .map_err(|e| AppError::internal("Failed to verify password", e))?
        .map_err(AppError::from)
}
