//!
//! # Error Handling
//!
//! This module defines `AppError`, the single error type every handler returns.
//! Each variant maps to one HTTP status, and every response carries a JSON body of
//! the form `{"message": "..."}` so clients can show the text as-is.
//!
//! Store and validation failures are mapped at each call site so the message names
//! the operation; `From` implementations cover token and hashing errors so `?` works there.
//! Internal failures are logged with their cause and answered with a generic message.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all possible errors that can occur while serving a request.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing input (HTTP 400).
    ValidationError(String),
    /// Bad credentials, or an invalid or expired token (HTTP 401).
    Unauthorized(String),
    /// No token was presented at all (HTTP 403).
    Forbidden(String),
    /// No row matched the requested id (HTTP 404).
    NotFound(String),
    /// A uniqueness constraint rejected the write (HTTP 409).
    Conflict(String),
    /// Unexpected store or runtime failure (HTTP 500).
    /// The message is what the client sees; the cause has already been logged.
    InternalError(String),
}

impl AppError {
    /// Logs `cause` and returns an `InternalError` carrying only `message`.
    pub fn internal(message: &str, cause: impl fmt::Display) -> Self {
        log::error!("{}: {}", message, cause);
        AppError::InternalError(message.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.message()
        }))
    }
}

/// Any token processing failure is reported as `Unauthorized`.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        log::warn!("Rejected token: {}", error);
        AppError::Unauthorized("Invalid token".into())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::internal("Password hashing failed", error)
    }
}
