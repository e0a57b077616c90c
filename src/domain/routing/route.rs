//! Client routes.

use std::fmt;

use super::guard::RouteGuard;
use crate::domain::foundation::ADMIN_ROLE;

/// Every page the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    /// Public sign-in page; guards redirect here.
    Login,
    CourseContent,
    /// Course administration, restricted to the admin role.
    AdminCourses,
    NotFound,
}

impl Route {
    /// Resolves a path to a route.
    ///
    /// Query strings, fragments and trailing slashes are ignored. Anything
    /// unrecognised resolves to [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(|c: char| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/course-content" => Route::CourseContent,
            "/admin/courses" => Route::AdminCourses,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::CourseContent => "/course-content",
            Route::AdminCourses => "/admin/courses",
            Route::NotFound => "/404",
        }
    }

    /// Guard protecting this route, if any.
    pub fn guard(&self) -> Option<RouteGuard> {
        match self {
            Route::AdminCourses => Some(RouteGuard::with_role(ADMIN_ROLE)),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
