//! Mock `CourseCatalog` for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::course::Course;
use crate::ports::{CatalogError, CourseCatalog};

/// Serves a fixed course list, or a forced error.
#[derive(Debug, Default)]
pub struct MockCourseCatalog {
    courses: Mutex<Vec<Course>>,
    force_error: Mutex<Option<CatalogError>>,
    calls: AtomicUsize,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockCourseCatalog {
    /// Creates a catalog with no courses.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(self, courses: Vec<Course>) -> Self {
        self.set_courses(courses);
        self
    }

    /// Forces every fetch to return the specified error.
    pub fn with_error(self, error: CatalogError) -> Self {
        *locked(&self.force_error) = Some(error);
        self
    }

    /// Replaces the served courses at runtime.
    pub fn set_courses(&self, courses: Vec<Course>) {
        *locked(&self.courses) = courses;
    }

    /// Clears the forced error.
    pub fn clear_error(&self) {
        *locked(&self.force_error) = None;
    }

    /// Number of fetches made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CourseCatalog for MockCourseCatalog {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = locked(&self.force_error).clone() {
            return Err(error);
        }

        Ok(locked(&self.courses).clone())
    }
}
