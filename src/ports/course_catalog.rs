//! Course catalog port for `GET /api/courses`.

use async_trait::async_trait;

use crate::domain::course::Course;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned status {0}")]
    Status(u16),

    #[error("Malformed course list: {0}")]
    MalformedResponse(String),
}

/// Read access to the course list.
///
/// Returns courses in backend order; lesson order within each course is
/// preserved exactly.
#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError>;
}
