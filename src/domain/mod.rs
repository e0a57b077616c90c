//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identity, IDs, errors)
//! - `session` - Client session state (identity, in-flight flag, last error)
//! - `course` - Course and lesson records and the browsing state over them
//! - `routing` - Client routes and the guard in front of protected ones
//! - `navigation` - Header menu drawer state

pub mod course;
pub mod foundation;
pub mod navigation;
pub mod routing;
pub mod session;
