//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the course portal.

mod auth;
mod errors;
mod ids;

pub use auth::{
    AuthError, Identity, ADMIN_ROLE, INVALID_INPUT_MESSAGE, LOGIN_FAILED_MESSAGE,
    REGISTRATION_FAILED_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
pub use errors::ValidationError;
pub use ids::{CourseId, LessonId};
