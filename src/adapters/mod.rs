//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `auth` - Login and registration (REST backend, mock)
//! - `catalog` - Course list (REST backend, mock)
//! - `rest` - Shared HTTP client and wire payloads
//! - `storage` - Persisted session storage (file, in-memory)
//! - `terminal` - Interactive text shell

pub mod auth;
pub mod catalog;
pub mod rest;
pub mod storage;
pub mod terminal;
