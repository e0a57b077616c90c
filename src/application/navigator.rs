//! Navigator - maps paths to pages and enforces route guards.

use std::sync::Arc;

use super::content_loader::ContentLoader;
use super::session_service::SessionService;
use crate::domain::routing::{GuardDecision, Route};

/// Outcome of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// Route the path resolved to.
    pub requested: Route,
    /// Route actually shown.
    pub landed: Route,
    /// True when a guard sent the user elsewhere.
    pub redirected: bool,
}

pub struct Navigator {
    session: Arc<SessionService>,
    content: ContentLoader,
    current: Route,
}

impl Navigator {
    /// Starts on the home page.
    pub fn new(session: Arc<SessionService>, content: ContentLoader) -> Self {
        Self {
            session,
            content,
            current: Route::Home,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn session(&self) -> &Arc<SessionService> {
        &self.session
    }

    pub fn content(&self) -> &ContentLoader {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentLoader {
        &mut self.content
    }

    /// Resolves `path`, applies its guard and shows the resulting page.
    ///
    /// Unknown paths land on `/404`. The course page triggers the first
    /// course fetch.
    pub async fn navigate(&mut self, path: &str) -> Navigation {
        let requested = Route::resolve(path);
        let navigation = self.go(requested).await;
        tracing::debug!(
            path,
            landed = %navigation.landed,
            redirected = navigation.redirected,
            "Navigated"
        );
        navigation
    }

    /// Re-evaluates the current page against the latest session.
    pub async fn refresh(&mut self) -> Navigation {
        self.go(self.current).await
    }

    async fn go(&mut self, requested: Route) -> Navigation {
        let landed = match requested.guard() {
            Some(guard) => match guard.evaluate(self.session.current_user().as_ref()) {
                GuardDecision::Render => requested,
                GuardDecision::Redirect(target) => target,
            },
            None => requested,
        };

        self.current = landed;
        if landed == Route::CourseContent {
            self.content.load().await;
        }

        Navigation {
            requested,
            landed,
            redirected: landed != requested,
        }
    }
}
