//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `AuthApi` - Login and registration endpoints
//! - `CourseCatalog` - Course list endpoint
//!
//! ## Local Ports
//!
//! - `KeyValueStore` - Persisted string storage (token, serialized identity)

mod auth_api;
mod course_catalog;
mod key_value_store;

pub use auth_api::{AuthApi, AuthApiError, LoginCredentials, LoginGrant, Registration};
pub use course_catalog::{CatalogError, CourseCatalog};
pub use key_value_store::{KeyValueStore, KeyValueStoreError, TOKEN_KEY, USER_KEY};
