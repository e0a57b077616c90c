//! ContentLoader - fetches the course list for the course page.
//!
//! The list is fetched once, on the first `load()`. A failed fetch stays
//! failed until the learner asks for `retry()`.

use std::sync::Arc;

use crate::domain::course::CourseBrowser;
use crate::ports::CourseCatalog;

/// Message shown when the course list could not be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load the courses. Please try again later.";

/// What the failure page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    Retry,
    GoHome,
}

impl FailureAction {
    pub const ALL: [FailureAction; 2] = [FailureAction::Retry, FailureAction::GoHome];

    pub fn label(&self) -> &'static str {
        match self {
            FailureAction::Retry => "Try again",
            FailureAction::GoHome => "Back to home",
        }
    }
}

/// Course page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentState {
    Loading,
    Failed { message: String },
    /// The backend answered with no courses. Not an error.
    Empty,
    Ready(CourseBrowser),
}

impl ContentState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentState::Loading)
    }

    /// Actions offered by the current state.
    pub fn actions(&self) -> &'static [FailureAction] {
        match self {
            ContentState::Failed { .. } => &FailureAction::ALL,
            _ => &[],
        }
    }
}

pub struct ContentLoader {
    catalog: Arc<dyn CourseCatalog>,
    state: ContentState,
    requested: bool,
}

impl ContentLoader {
    pub fn new(catalog: Arc<dyn CourseCatalog>) -> Self {
        Self {
            catalog,
            state: ContentState::Loading,
            requested: false,
        }
    }

    pub fn state(&self) -> &ContentState {
        &self.state
    }

    /// True once the first fetch has been issued.
    pub fn has_requested(&self) -> bool {
        self.requested
    }

    pub fn browser(&self) -> Option<&CourseBrowser> {
        match &self.state {
            ContentState::Ready(browser) => Some(browser),
            _ => None,
        }
    }

    pub fn browser_mut(&mut self) -> Option<&mut CourseBrowser> {
        match &mut self.state {
            ContentState::Ready(browser) => Some(browser),
            _ => None,
        }
    }

    /// Issues the first fetch. Later calls return the current state untouched.
    pub async fn load(&mut self) -> &ContentState {
        if !self.requested {
            self.requested = true;
            self.fetch().await;
        }
        &self.state
    }

    /// Resets to `Loading` and fetches again.
    pub async fn retry(&mut self) -> &ContentState {
        self.requested = true;
        self.state = ContentState::Loading;
        self.fetch().await;
        &self.state
    }

    async fn fetch(&mut self) {
        self.state = match self.catalog.list_courses().await {
            Ok(courses) if courses.is_empty() => {
                tracing::info!("Course list is empty");
                ContentState::Empty
            }
            Ok(courses) => {
                tracing::debug!(count = courses.len(), "Loaded courses");
                ContentState::Ready(CourseBrowser::new(courses))
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching courses");
                ContentState::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                }
            }
        };
    }
}
