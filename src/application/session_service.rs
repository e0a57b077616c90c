//! SessionService - the single owner of the learner's session.
//!
//! State lives in a `tokio::sync::watch` channel: every mutation goes through
//! this service, and pages or guards observe it via [`SessionService::subscribe`].
//! The service persists the bearer token and the serialized identity under
//! the `token` and `user` keys of the injected [`KeyValueStore`].

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::watch;

use crate::domain::foundation::{AuthError, Identity};
use crate::domain::session::Session;
use crate::ports::{
    AuthApi, AuthApiError, KeyValueStore, LoginCredentials, LoginGrant, Registration, TOKEN_KEY,
    USER_KEY,
};

pub struct SessionService {
    store: Arc<dyn KeyValueStore>,
    auth: Arc<dyn AuthApi>,
    state: watch::Sender<Session>,
    restored: AtomicBool,
    /// Bumped by `login` and `logout`. A restore that observes a bump while
    /// reading storage does not adopt what it read.
    generation: AtomicU64,
}

impl SessionService {
    /// Creates a service in the restoring state. Call [`restore`](Self::restore)
    /// once at startup.
    pub fn new(store: Arc<dyn KeyValueStore>, auth: Arc<dyn AuthApi>) -> Self {
        let (state, _) = watch::channel(Session::restoring());
        Self {
            store,
            auth,
            state,
            restored: AtomicBool::new(false),
            generation: AtomicU64::new(0),
        }
    }

    /// Copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Change stream for the session.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Adopts the persisted identity, if any.
    ///
    /// Runs once; later calls return immediately. Never fails: unreadable or
    /// corrupt data leaves the session signed out. A `login` or `logout`
    /// that starts while the read is in flight wins over the stored identity.
    pub async fn restore(&self) {
        if self.restored.swap(true, Ordering::SeqCst) {
            return;
        }
        let generation = self.generation.load(Ordering::SeqCst);

        match self.store.get(USER_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    self.state.send_modify(|s| {
                        if self.generation.load(Ordering::SeqCst) == generation {
                            tracing::info!(email = %identity.email, "Restored session");
                            s.sign_in(identity);
                        } else {
                            tracing::debug!("Stored session superseded during restore");
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding corrupt stored identity");
                    if let Err(e) = self.store.remove(USER_KEY).await {
                        tracing::warn!(error = %e, "Failed to remove corrupt identity");
                    }
                }
            },
            Ok(None) => tracing::debug!("No stored session"),
            Err(e) => tracing::warn!(error = %e, "Could not read stored session"),
        }

        self.state.send_modify(Session::finish_operation);
    }

    /// Signs in against the backend and persists the session.
    ///
    /// On failure the learner-facing message is recorded as the session error
    /// and returned.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: SecretString,
    ) -> Result<Identity, AuthError> {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(Session::begin_operation);

        let credentials = LoginCredentials {
            email: email.into(),
            password,
        };
        tracing::debug!(email = %credentials.email, "Logging in");

        let result = match self.auth.login(&credentials).await {
            Ok(grant) => self.persist(grant).await,
            Err(e) => Err(login_error(e)),
        };

        self.state.send_modify(|s| {
            match &result {
                Ok(identity) => s.sign_in(identity.clone()),
                Err(e) => s.record_error(e.to_string()),
            }
            s.finish_operation();
        });

        match &result {
            Ok(identity) => tracing::info!(email = %identity.email, "Login succeeded"),
            Err(e) => tracing::info!(error = %e, "Login failed"),
        }
        result
    }

    async fn persist(&self, grant: LoginGrant) -> Result<Identity, AuthError> {
        use secrecy::ExposeSecret;

        let user = serde_json::to_string(&grant.identity)
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        self.store
            .set(TOKEN_KEY, grant.token.expose_secret())
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        if let Err(e) = self.store.set(USER_KEY, &user).await {
            if let Err(cleanup) = self.store.remove(TOKEN_KEY).await {
                tracing::warn!(error = %cleanup, "Failed to remove token after partial persist");
            }
            return Err(AuthError::Storage(e.to_string()));
        }

        Ok(grant.identity)
    }

    /// Creates an account. Does not sign in, and does not touch the
    /// session error.
    pub async fn register(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: SecretString,
    ) -> Result<(), AuthError> {
        self.state.send_modify(Session::begin_operation);

        let registration = Registration {
            name: name.into(),
            email: email.into(),
            password,
        };
        tracing::debug!(email = %registration.email, "Registering");

        let result = self
            .auth
            .register(&registration)
            .await
            .map_err(registration_error);

        self.state.send_modify(Session::finish_operation);

        match &result {
            Ok(()) => tracing::info!(email = %registration.email, "Registration succeeded"),
            Err(e) => tracing::info!(error = %e, "Registration failed"),
        }
        result
    }

    /// Clears the identity and forgets the persisted session.
    ///
    /// The identity is cleared before storage is touched; storage failures
    /// are logged only.
    pub async fn logout(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(Session::sign_out);

        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!(key, error = %e, "Failed to remove stored session");
            }
        }
        tracing::info!("Logged out");
    }

    pub fn clear_error(&self) {
        self.state.send_modify(Session::clear_error);
    }
}

fn login_error(error: AuthApiError) -> AuthError {
    match error {
        AuthApiError::Rejected { status, message } => {
            AuthError::from_login_rejection(status, message)
        }
        AuthApiError::Network(detail) => AuthError::Network(detail),
        AuthApiError::MalformedResponse(detail) => AuthError::MalformedResponse(detail),
    }
}

fn registration_error(error: AuthApiError) -> AuthError {
    match error {
        AuthApiError::Rejected { message, .. } => AuthError::from_registration_rejection(message),
        AuthApiError::Network(detail) => AuthError::Network(detail),
        AuthApiError::MalformedResponse(detail) => AuthError::MalformedResponse(detail),
    }
}
