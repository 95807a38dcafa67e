//! Route table and auth gating
//!
//! The view shell modeled as data: dashboard and payment are protected,
//! root redirects based on session presence. Resolutions are values so
//! tests assert on state instead of navigation side effects.

use std::fmt;

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
    Payment,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Payment => "/payment",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/dashboard" => Some(Route::Dashboard),
            "/payment" => Some(Route::Payment),
            _ => None,
        }
    }

    /// Protected routes require a session token.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Payment)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a route against the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Show(Route),
    Redirect(Route),
}

/// Resolve a requested route given whether a session token is present.
pub fn resolve(route: Route, authenticated: bool) -> Resolution {
    match route {
        Route::Root => Resolution::Redirect(if authenticated {
            Route::Dashboard
        } else {
            Route::Login
        }),
        r if r.is_protected() && !authenticated => Resolution::Redirect(Route::Login),
        r => Resolution::Show(r),
    }
}
