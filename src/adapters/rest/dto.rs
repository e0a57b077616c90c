//! Wire payloads of the course backend.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Identity;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login payload: the token plus the identity fields.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub identity: Identity,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Error payload returned alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extracts a non-blank `error` field, ignoring bodies that do not parse.
    pub fn parse_lenient(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|message| !message.trim().is_empty())
    }
}
