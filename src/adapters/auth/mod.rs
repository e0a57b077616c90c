//! Authentication adapters.
//!
//! Implementations of the `AuthApi` port:
//!
//! - `rest` - The course backend's `/api/auth` endpoints over HTTP
//! - `mock` - Test implementation that doesn't require a running backend

mod mock;
mod rest;

pub use mock::MockAuthApi;
pub use rest::RestAuthApi;
