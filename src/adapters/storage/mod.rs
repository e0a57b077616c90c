//! Storage Adapters
//!
//! Implementations of the KeyValueStore port for persisting the session.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores entries as one JSON file on disk
//! - **InMemoryKeyValueStore** - Stores entries in memory (testing/ephemeral sessions)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Production: file-based storage
//! let store = FileKeyValueStore::new("./data/portal-storage.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
