//! Course catalog adapters.
//!
//! - `rest` - `GET /api/courses` on the course backend
//! - `mock` - Fixed in-process course list for tests and demos

mod mock;
mod rest;

pub use mock::MockCourseCatalog;
pub use rest::RestCourseCatalog;
