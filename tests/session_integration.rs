//! Integration tests for the session against a live HTTP backend.
//!
//! These tests verify the full login/register/logout path:
//! 1. Rejections map to the learner-facing messages
//! 2. Successful logins persist the token and identity
//! 3. A persisted identity is restored by a fresh service

mod common;

use std::sync::Arc;

use secrecy::SecretString;
use tempfile::TempDir;

use course_portal::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use course_portal::domain::foundation::{
    AuthError, Identity, INVALID_INPUT_MESSAGE, LOGIN_FAILED_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
use course_portal::ports::{KeyValueStore, TOKEN_KEY, USER_KEY};

use common::{CoursesMode, ADMIN_EMAIL, PASSWORD};

fn password(value: &str) -> SecretString {
    SecretString::new(value.to_string())
}

async fn login_error(email: &str) -> AuthError {
    let base_url = common::spawn_backend(CoursesMode::Ready).await;
    let session = common::session_service(&base_url, Arc::new(InMemoryKeyValueStore::new()));
    session.restore().await;

    let err = session.login(email, password("pw")).await.unwrap_err();

    assert_eq!(session.snapshot().error(), Some(err.to_string().as_str()));
    assert!(!session.is_loading());
    err
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_persists_session_and_restores_it_on_next_start() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("portal-storage.json");
    let base_url = common::spawn_backend(CoursesMode::Ready).await;

    let first = common::session_service(&base_url, Arc::new(FileKeyValueStore::new(&path)));
    first.restore().await;
    let identity = first.login(ADMIN_EMAIL, password(PASSWORD)).await.unwrap();
    assert_eq!(identity, Identity::new("Ana", ADMIN_EMAIL, "admin"));

    let store = FileKeyValueStore::new(&path);
    assert_eq!(
        store.get(TOKEN_KEY).await.unwrap(),
        Some("token-ana".to_string())
    );

    let second = common::session_service(&base_url, Arc::new(FileKeyValueStore::new(&path)));
    second.restore().await;

    assert_eq!(second.current_user(), Some(identity));
}

#[tokio::test]
async fn login_404_reports_missing_user_regardless_of_body() {
    let err = login_error("nobody@example.com").await;

    assert_eq!(err, AuthError::UserNotFound);
    assert_eq!(err.to_string(), USER_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn login_400_uses_server_error_field() {
    let base_url = common::spawn_backend(CoursesMode::Ready).await;
    let session = common::session_service(&base_url, Arc::new(InMemoryKeyValueStore::new()));

    let err = session
        .login(ADMIN_EMAIL, password("wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Incorrect password");
}

#[tokio::test]
async fn login_400_without_body_uses_default_message() {
    let err = login_error("bare-400@example.com").await;

    assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
}

#[tokio::test]
async fn login_other_status_uses_server_message_or_fallback() {
    assert_eq!(login_error("teapot@example.com").await.to_string(), "Try coffee");
    assert_eq!(
        login_error("broken@example.com").await.to_string(),
        LOGIN_FAILED_MESSAGE
    );
}

#[tokio::test]
async fn login_with_unreadable_payload_is_reported() {
    let err = login_error("garbled@example.com").await;

    assert!(matches!(err, AuthError::MalformedResponse(_)));
    assert!(err
        .to_string()
        .starts_with("Unexpected response from server:"));
}

#[tokio::test]
async fn login_without_backend_reports_network_error() {
    let base_url = common::closed_port_url().await;
    let store = Arc::new(InMemoryKeyValueStore::new());
    let session = common::session_service(&base_url, store.clone());

    let err = session
        .login(ADMIN_EMAIL, password(PASSWORD))
        .await
        .unwrap_err();

    assert!(err.is_transient());
    assert!(err.to_string().starts_with("Could not reach the server:"));
    assert!(store.is_empty().await);
}

// =============================================================================
// Register and logout
// =============================================================================

#[tokio::test]
async fn register_succeeds_without_signing_in() {
    let base_url = common::spawn_backend(CoursesMode::Ready).await;
    let session = common::session_service(&base_url, Arc::new(InMemoryKeyValueStore::new()));
    session.restore().await;

    session
        .register("Marta", "marta@example.com", password("pw"))
        .await
        .unwrap();

    assert_eq!(session.current_user(), None);
    assert_eq!(session.snapshot().error(), None);
}

#[tokio::test]
async fn register_rejection_returns_server_message() {
    let base_url = common::spawn_backend(CoursesMode::Ready).await;
    let session = common::session_service(&base_url, Arc::new(InMemoryKeyValueStore::new()));

    let err = session
        .register("Ana", "taken@example.com", password("pw"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");

    let err = session
        .register("Ana", "silent@example.com", password("pw"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Registration failed");
    assert_eq!(session.snapshot().error(), None);
}

#[tokio::test]
async fn logout_forgets_persisted_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("portal-storage.json");
    let base_url = common::spawn_backend(CoursesMode::Ready).await;
    let session = common::session_service(&base_url, Arc::new(FileKeyValueStore::new(&path)));
    session.login(ADMIN_EMAIL, password(PASSWORD)).await.unwrap();

    session.logout().await;

    let store = FileKeyValueStore::new(&path);
    assert_eq!(store.get(TOKEN_KEY).await.unwrap(), None);
    assert_eq!(store.get(USER_KEY).await.unwrap(), None);
    assert_eq!(session.current_user(), None);
}

#[tokio::test]
async fn corrupt_persisted_identity_is_discarded_on_restore() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("portal-storage.json");
    let store = FileKeyValueStore::new(&path);
    store.set(USER_KEY, "{\"nombre\": 42").await.unwrap();
    let base_url = common::closed_port_url().await;

    let session = common::session_service(&base_url, Arc::new(FileKeyValueStore::new(&path)));
    session.restore().await;

    assert_eq!(session.current_user(), None);
    assert_eq!(store.get(USER_KEY).await.unwrap(), None);
}
