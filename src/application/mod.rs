//! Application layer - services that orchestrate domain types and ports.
//!
//! - `SessionService` - restore, login, register, logout
//! - `ContentLoader` - one-shot course fetch with loading/failed/empty states
//! - `Navigator` - route resolution behind the guards
//! - `AppContext` - explicit composition root

mod content_loader;
mod context;
mod navigator;
mod session_service;

pub use content_loader::{ContentLoader, ContentState, FailureAction, LOAD_FAILED_MESSAGE};
pub use context::{AppContext, AppContextBuilder, ContextError};
pub use navigator::{Navigation, Navigator};
pub use session_service::SessionService;
