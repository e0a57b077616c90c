//! Auth API port for the backend's login and registration endpoints.
//!
//! The port reports what the backend said (status and optional `error`
//! field) without interpreting it. Turning a rejection into a learner-facing
//! message is the domain's job (see `AuthError::from_login_rejection`).

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::Identity;

/// Credentials for `POST /api/auth/login`.
#[derive(Debug)]
pub struct LoginCredentials {
    pub email: String,
    pub password: SecretString,
}

/// Data for `POST /api/auth/register`.
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

/// A successful login: bearer token plus the identity it belongs to.
#[derive(Debug)]
pub struct LoginGrant {
    pub token: SecretString,
    pub identity: Identity,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Rejected with status {status}")]
    Rejected {
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    /// A success status with a payload that could not be read.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Remote authentication endpoints.
///
/// # Contract
///
/// Implementations must:
/// - Return `Rejected` with the raw status for any non-2xx response
/// - Extract the body's `error` field when it is present and readable,
///   and never fail because the body is missing or not JSON
/// - Return `Network` when no response was received
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, AuthApiError>;

    /// Registers an account. Success carries no payload.
    async fn register(&self, registration: &Registration) -> Result<(), AuthApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_displays_status() {
        let err = AuthApiError::Rejected {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "Rejected with status 404");
    }

    #[test]
    fn auth_api_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AuthApi>();
    }
}
