//! Route guard: authentication plus an optional exact role match.
//!
//! The guard is a pure function of the identity at evaluation time. It never
//! fetches or mutates; callers re-evaluate it whenever the session changes.

use super::route::Route;
use crate::domain::foundation::Identity;

/// Where a denied visitor is sent.
pub const SIGN_IN_ROUTE: Route = Route::Login;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    required_role: Option<String>,
}

/// Outcome of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Protected content, or the redirect that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Render(T),
    Redirect(Route),
}

impl<T> Guarded<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Guarded::Redirect(_))
    }
}

impl RouteGuard {
    /// Requires any signed-in identity.
    pub fn authenticated() -> Self {
        Self {
            required_role: None,
        }
    }

    /// Requires a signed-in identity whose role equals `role` exactly.
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            required_role: Some(role.into()),
        }
    }

    pub fn required_role(&self) -> Option<&str> {
        self.required_role.as_deref()
    }

    pub fn evaluate(&self, identity: Option<&Identity>) -> GuardDecision {
        match (identity, self.required_role.as_deref()) {
            (None, _) => GuardDecision::Redirect(SIGN_IN_ROUTE),
            (Some(identity), Some(role)) if !identity.has_role(role) => {
                GuardDecision::Redirect(SIGN_IN_ROUTE)
            }
            _ => GuardDecision::Render,
        }
    }

    /// Wraps `content`, passing it through unchanged when access is granted.
    pub fn protect<T>(&self, identity: Option<&Identity>, content: T) -> Guarded<T> {
        match self.evaluate(identity) {
            GuardDecision::Render => Guarded::Render(content),
            GuardDecision::Redirect(route) => Guarded::Redirect(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_role(role: &str) -> Identity {
        Identity::new("Ana", "ana@example.com", role)
    }

    #[test]
    fn no_identity_always_redirects() {
        for guard in [
            RouteGuard::authenticated(),
            RouteGuard::with_role("admin"),
            RouteGuard::with_role("student"),
        ] {
            assert_eq!(guard.evaluate(None), GuardDecision::Redirect(Route::Login));
            assert!(guard.protect(None, "subtree").is_redirect());
        }
    }

    #[test]
    fn matching_role_renders_subtree_unchanged() {
        let admin = with_role("admin");
        let guard = RouteGuard::with_role("admin");

        assert_eq!(guard.protect(Some(&admin), "subtree"), Guarded::Render("subtree"));
    }

    #[test]
    fn mismatched_role_redirects() {
        let student = with_role("student");
        let guard = RouteGuard::with_role("admin");

        assert_eq!(
            guard.evaluate(Some(&student)),
            GuardDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn role_match_is_case_sensitive() {
        let shouting = with_role("ADMIN");
        assert!(RouteGuard::with_role("admin")
            .protect(Some(&shouting), ())
            .is_redirect());
    }

    #[test]
    fn authenticated_guard_accepts_any_role() {
        let student = with_role("student");
        assert_eq!(
            RouteGuard::authenticated().evaluate(Some(&student)),
            GuardDecision::Render
        );
    }
}
