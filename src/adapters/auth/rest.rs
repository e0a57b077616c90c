//! REST implementation of the `AuthApi` port.
//!
//! # Endpoints
//!
//! - `POST /api/auth/login` with `{email, password}`, answering
//!   `{token, nombre, email, rol}` or `{error}`
//! - `POST /api/auth/register` with `{nombre, email, password}`, answering
//!   a success status or `{error}`

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::adapters::rest::{LoginRequest, LoginResponse, RegisterRequest, RestClient};
use crate::ports::{AuthApi, AuthApiError, LoginCredentials, LoginGrant, Registration};

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";

/// Auth endpoints of the course backend.
#[derive(Debug, Clone)]
pub struct RestAuthApi {
    client: RestClient,
}

impl RestAuthApi {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn network_error(&self, error: reqwest::Error) -> AuthApiError {
        let detail = self.client.describe_transport_error(&error);
        tracing::error!(error = %error, "Auth request failed");
        AuthApiError::Network(detail)
    }

    async fn rejection(response: reqwest::Response) -> AuthApiError {
        let status = response.status().as_u16();
        let message = RestClient::error_message(response).await;
        tracing::debug!(status, has_message = message.is_some(), "Auth request rejected");
        AuthApiError::Rejected { status, message }
    }
}

#[async_trait]
impl AuthApi for RestAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, AuthApiError> {
        let body = LoginRequest {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        };

        let response = self
            .client
            .http()
            .post(self.client.url(LOGIN_PATH))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let payload: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthApiError::MalformedResponse(e.to_string()))?;

        Ok(LoginGrant {
            token: SecretString::new(payload.token),
            identity: payload.identity,
        })
    }

    async fn register(&self, registration: &Registration) -> Result<(), AuthApiError> {
        let body = RegisterRequest {
            nombre: &registration.name,
            email: &registration.email,
            password: registration.password.expose_secret(),
        };

        let response = self
            .client
            .http()
            .post(self.client.url(REGISTER_PATH))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(())
    }
}
