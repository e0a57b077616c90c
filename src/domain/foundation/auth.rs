//! Authentication types for the domain layer.
//!
//! These types describe who is signed in and what went wrong when signing
//! in failed. They have **no transport dependencies**: the `AuthApi` port
//! reports raw rejections and [`AuthError::from_login_rejection`] turns them
//! into the messages shown to the learner.
//!
//! # Wire names
//!
//! The backend speaks Spanish field names (`nombre`, `rol`). `Identity` keeps
//! those names on the wire and in persisted storage, and English names in
//! code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role required by the course administration area.
pub const ADMIN_ROLE: &str = "admin";

/// Message shown when the backend rejects malformed credentials without detail.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Check your email and password.";

/// Message shown when the backend does not know the account.
pub const USER_NOT_FOUND_MESSAGE: &str = "User does not exist. Please register.";

/// Fallback message for any other login rejection.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Fallback message for a rejected registration.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// The signed-in user.
///
/// Produced by a successful login or restored from persisted storage.
/// Uniqueness is the backend's concern; the client trusts what it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Name shown in the interface.
    #[serde(rename = "nombre")]
    pub display_name: String,

    pub email: String,

    /// Role string as issued by the backend (e.g. "admin", "student").
    #[serde(rename = "rol")]
    pub role: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Exact, case-sensitive role comparison.
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

/// Authentication failures, phrased for the learner.
///
/// The `Display` output of every variant is the message surfaced on screen
/// and recorded in the session error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend rejected the credentials as malformed (HTTP 400).
    #[error("{0}")]
    InvalidInput(String),

    /// The backend does not know this account (HTTP 404).
    #[error("User does not exist. Please register.")]
    UserNotFound,

    /// Any other rejection, carrying the server message or a fallback.
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached.
    #[error("Could not reach the server: {0}")]
    Network(String),

    /// The backend answered with success but the payload was unusable.
    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),

    /// The session could not be written to local storage.
    #[error("Could not save the session: {0}")]
    Storage(String),
}

impl AuthError {
    /// Maps a rejected login to a learner-facing error.
    ///
    /// A 404 always yields [`AuthError::UserNotFound`], regardless of the body.
    pub fn from_login_rejection(status: u16, server_message: Option<String>) -> Self {
        match status {
            400 => AuthError::InvalidInput(
                server_message.unwrap_or_else(|| INVALID_INPUT_MESSAGE.to_string()),
            ),
            404 => AuthError::UserNotFound,
            _ => AuthError::Rejected(
                server_message.unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            ),
        }
    }

    /// Maps a rejected registration to a learner-facing error.
    pub fn from_registration_rejection(server_message: Option<String>) -> Self {
        AuthError::Rejected(
            server_message.unwrap_or_else(|| REGISTRATION_FAILED_MESSAGE.to_string()),
        )
    }

    /// Returns true if the failure came from the transport, not the backend.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::Network(_))
    }
}
