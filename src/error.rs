use serde::{Deserialize, Serialize};

use crate::result::ApiResponse;

/// Public API error response format
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Business failure taxonomy of the identity service
///
/// The envelope itself has no failure modes; producers reduce every error to
/// a (code, message) pair before constructing the response. This enum is that
/// reduction policy: each variant carries its HTTP-style code band and a
/// human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Create user failed")]
    CreateUserFailed,
    #[error("Identity provider error")]
    IdentityProvider,
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Session not valid")]
    SessionNotValid,
    #[error("Internal server error")]
    Internal,
}

impl AuthError {
    /// The HTTP-style status code for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::UserAlreadyExists | AuthError::UserNotFound => 400,
            AuthError::Unauthenticated | AuthError::SessionNotValid => 401,
            AuthError::CreateUserFailed | AuthError::IdentityProvider | AuthError::Internal => 500,
        }
    }

    /// Reduces the failure to a bodyless envelope
    pub fn to_response<T>(&self) -> ApiResponse<T> {
        ApiResponse::new(self.status_code(), self.to_string(), None)
    }
}
