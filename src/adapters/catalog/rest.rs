//! REST implementation of the `CourseCatalog` port (`GET /api/courses`).

use async_trait::async_trait;

use crate::adapters::rest::RestClient;
use crate::domain::course::Course;
use crate::ports::{CatalogError, CourseCatalog};

const COURSES_PATH: &str = "/api/courses";

/// Course list endpoint of the course backend.
#[derive(Debug, Clone)]
pub struct RestCourseCatalog {
    client: RestClient,
}

impl RestCourseCatalog {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CourseCatalog for RestCourseCatalog {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        let response = self
            .client
            .http()
            .get(self.client.url(COURSES_PATH))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Course request failed");
                CatalogError::Network(self.client.describe_transport_error(&e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Course request rejected");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let courses: Vec<Course> = response
            .json()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;

        tracing::debug!(count = courses.len(), "Fetched courses");
        Ok(courses)
    }
}
