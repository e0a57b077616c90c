//! Mock `AuthApi` for testing.
//!
//! Accounts are registered up front; logging in with a known email and the
//! matching password yields a grant, anything else a 404 or 400 rejection the
//! way the real backend answers.
//!
//! # Example
//!
//! ```ignore
//! use course_portal::adapters::auth::MockAuthApi;
//! use course_portal::domain::foundation::Identity;
//!
//! let api = MockAuthApi::new()
//!     .with_account(Identity::new("Ana", "ana@example.com", "admin"), "secret");
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::Identity;
use crate::ports::{AuthApi, AuthApiError, LoginCredentials, LoginGrant, Registration};

#[derive(Debug, Clone)]
struct Account {
    identity: Identity,
    password: String,
}

/// In-process stand-in for the auth endpoints.
#[derive(Debug, Default)]
pub struct MockAuthApi {
    /// Accounts keyed by email
    accounts: Mutex<HashMap<String, Account>>,
    /// Optional error returned by every call (for error testing)
    force_error: Mutex<Option<AuthApiError>>,
    login_calls: AtomicUsize,
    register_calls: AtomicUsize,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account that can log in with `password`.
    pub fn with_account(self, identity: Identity, password: impl Into<String>) -> Self {
        self.add_account(identity, password);
        self
    }

    /// Forces every call to return the specified error.
    pub fn with_error(self, error: AuthApiError) -> Self {
        *locked(&self.force_error) = Some(error);
        self
    }

    /// Clears the forced error.
    pub fn clear_error(&self) {
        *locked(&self.force_error) = None;
    }

    /// Adds an account at runtime.
    pub fn add_account(&self, identity: Identity, password: impl Into<String>) {
        let account = Account {
            identity,
            password: password.into(),
        };
        locked(&self.accounts).insert(account.identity.email.clone(), account);
    }

    pub fn account_count(&self) -> usize {
        locked(&self.accounts).len()
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    fn forced_error(&self) -> Option<AuthApiError> {
        locked(&self.force_error).clone()
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, AuthApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        let accounts = locked(&self.accounts);
        let account = accounts
            .get(&credentials.email)
            .ok_or(AuthApiError::Rejected {
                status: 404,
                message: None,
            })?;

        if account.password != credentials.password.expose_secret().as_str() {
            return Err(AuthApiError::Rejected {
                status: 400,
                message: Some("Incorrect password".to_string()),
            });
        }

        Ok(LoginGrant {
            token: SecretString::new(format!("mock-token-{}", account.identity.email)),
            identity: account.identity.clone(),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<(), AuthApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.forced_error() {
            return Err(error);
        }

        if locked(&self.accounts).contains_key(&registration.email) {
            return Err(AuthApiError::Rejected {
                status: 409,
                message: Some("Email already registered".to_string()),
            });
        }

        self.add_account(
            Identity::new(&registration.name, &registration.email, "student"),
            registration.password.expose_secret().clone(),
        );
        Ok(())
    }
}
