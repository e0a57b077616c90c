//! AppContext - the composition root handed to the presentation layer.
//!
//! Providers are injected explicitly through [`AppContextBuilder`]. Asking
//! for one that was never provided is an error, not a panic.

use std::sync::Arc;

use thiserror::Error;

use super::content_loader::ContentLoader;
use super::navigator::Navigator;
use super::session_service::SessionService;
use crate::ports::CourseCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("No {0} provider was configured for this context")]
    MissingProvider(&'static str),
}

#[derive(Clone, Default)]
pub struct AppContext {
    session: Option<Arc<SessionService>>,
    catalog: Option<Arc<dyn CourseCatalog>>,
}

impl AppContext {
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder::default()
    }

    pub fn session(&self) -> Result<&Arc<SessionService>, ContextError> {
        self.session
            .as_ref()
            .ok_or(ContextError::MissingProvider("session"))
    }

    pub fn catalog(&self) -> Result<&Arc<dyn CourseCatalog>, ContextError> {
        self.catalog
            .as_ref()
            .ok_or(ContextError::MissingProvider("catalog"))
    }

    /// Builds a navigator over this context's providers, starting at home.
    pub fn navigator(&self) -> Result<Navigator, ContextError> {
        let session = self.session()?.clone();
        let content = ContentLoader::new(self.catalog()?.clone());
        Ok(Navigator::new(session, content))
    }
}

#[derive(Default)]
pub struct AppContextBuilder {
    session: Option<Arc<SessionService>>,
    catalog: Option<Arc<dyn CourseCatalog>>,
}

impl AppContextBuilder {
    pub fn session(mut self, session: Arc<SessionService>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn catalog(mut self, catalog: Arc<dyn CourseCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> AppContext {
        AppContext {
            session: self.session,
            catalog: self.catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockAuthApi;
    use crate::adapters::catalog::MockCourseCatalog;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::domain::routing::Route;

    fn session() -> Arc<SessionService> {
        Arc::new(SessionService::new(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(MockAuthApi::new()),
        ))
    }

    #[test]
    fn missing_session_provider_is_an_error() {
        let context = AppContext::builder()
            .catalog(Arc::new(MockCourseCatalog::new()))
            .build();

        assert_eq!(
            context.session().err(),
            Some(ContextError::MissingProvider("session"))
        );
    }

    #[test]
    fn missing_catalog_provider_is_an_error() {
        let context = AppContext::builder().session(session()).build();

        assert_eq!(
            context.navigator().err(),
            Some(ContextError::MissingProvider("catalog"))
        );
    }

    #[test]
    fn error_message_names_the_provider() {
        assert_eq!(
            ContextError::MissingProvider("session").to_string(),
            "No session provider was configured for this context"
        );
    }

    #[test]
    fn complete_context_builds_navigator_at_home() {
        let context = AppContext::builder()
            .session(session())
            .catalog(Arc::new(MockCourseCatalog::new()))
            .build();

        let navigator = context.navigator().unwrap();

        assert_eq!(navigator.current(), Route::Home);
        assert!(Arc::ptr_eq(navigator.session(), context.session().unwrap()));
    }
}
