//! Client-side routing: the route table and the guard in front of it.

mod guard;
mod route;

pub use guard::{GuardDecision, Guarded, RouteGuard, SIGN_IN_ROUTE};
pub use route::Route;
