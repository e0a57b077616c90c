//! Key-Value Store Port - Interface for the client's persisted storage.
//!
//! The session keeps a bearer token and a serialized identity between runs.
//! In a browser this is local storage; here it is any string-to-string store.
//! Abstracting it lets the session service run against an in-memory fake.

use async_trait::async_trait;

/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the JSON-serialized identity.
pub const USER_KEY: &str = "user";

/// Errors that can occur during key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Storage file is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to serialize storage: {0}")]
    SerializationFailed(String),
}

/// Port for a small persistent string map
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// `Ok(None)` if the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove a value. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}
