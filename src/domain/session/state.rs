//! Client session state.
//!
//! # Invariants
//!
//! - At most one identity at a time.
//! - `loading` is true only while restore, login or register is in flight.
//!   A new session starts with `loading = true` because restore is pending.
//! - `error` is cleared when an operation begins, when login succeeds and on
//!   an explicit clear.
//!
//! `identity.is_none()` is the authoritative "signed out" signal regardless
//! of `loading`.

use crate::domain::foundation::Identity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    /// Session at startup: signed out, restore pending.
    pub fn restoring() -> Self {
        Self {
            identity: None,
            loading: true,
            error: None,
        }
    }

    /// Signed-out session with nothing in flight.
    pub fn signed_out() -> Self {
        Self {
            identity: None,
            loading: false,
            error: None,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Marks an authentication operation as started.
    pub fn begin_operation(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Marks the in-flight operation as finished, whatever its outcome.
    pub fn finish_operation(&mut self) {
        self.loading = false;
    }

    pub fn sign_in(&mut self, identity: Identity) {
        self.identity = Some(identity);
        self.error = None;
    }

    pub fn sign_out(&mut self) {
        self.identity = None;
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::restoring()
    }
}
