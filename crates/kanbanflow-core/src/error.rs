//! Typed errors for the client.
//!
//! - `ApiError`: anything that went wrong talking to the backend
//! - `SessionError`: what the session context shows the user
//! - `BoardError`, `DashboardError`: banners on the two main views
//! - `FormError`: local validation before a request is sent

use thiserror::Error;

/// Errors from a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Session expired, please sign in again")]
    Unauthorized,

    #[error("Server returned status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Errors surfaced by the session context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session expired")]
    Expired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Registration failed")]
    RegistrationFailed,
}

/// Errors shown on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Failed to load tasks")]
    LoadFailed,

    #[error("Failed to update status")]
    StatusUpdateFailed,
}

/// Errors shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("Failed to load projects")]
    LoadProjectsFailed,

    #[error("Failed to create project")]
    CreateProjectFailed,

    #[error("Failed to create task")]
    CreateTaskFailed,

    #[error("Select a project first")]
    NoProjectSelected,

    #[error(transparent)]
    Invalid(#[from] FormError),
}

/// Local form validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

pub type ApiResult<T> = Result<T, ApiError>;
