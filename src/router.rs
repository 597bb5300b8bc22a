//! Route table and navigation guard for the admin console

use crate::api::{SessionContext, LOGIN_ROUTE};

/// Where a logged-in user lands
pub const HOME_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    pub admin_only: bool,
    /// Unconditional redirect target
    pub redirect: Option<&'static str>,
}

impl Route {
    const fn page(path: &'static str, name: &'static str, requires_auth: bool) -> Self {
        Self {
            path,
            name,
            requires_auth,
            admin_only: false,
            redirect: None,
        }
    }
}

/// The console's routes
pub const ROUTES: &[Route] = &[
    Route::page(LOGIN_ROUTE, "Login", false),
    Route::page(HOME_ROUTE, "Dashboard", true),
    Route::page("/reports", "Reports", true),
    Route {
        admin_only: true,
        ..Route::page("/users", "Users", true)
    },
    Route {
        redirect: Some(LOGIN_ROUTE),
        ..Route::page("/", "Root", false)
    },
];

/// Outcome of guarding a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(String),
}

pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

/// Decide whether navigating to `path` may proceed
///
/// - auth-required route without a token → login
/// - login route with a token → dashboard
/// - admin-only route for a non-admin → dashboard
///
/// Paths outside the table proceed; the host renders its own not-found.
pub fn guard(path: &str, session: &SessionContext) -> Navigation {
    let Some(route) = find_route(path) else {
        return Navigation::Proceed;
    };

    let target = if let Some(redirect) = route.redirect {
        Some(redirect)
    } else if route.requires_auth && !session.is_authenticated() {
        Some(LOGIN_ROUTE)
    } else if route.path == LOGIN_ROUTE && session.is_authenticated() {
        Some(HOME_ROUTE)
    } else if route.admin_only && !session.is_admin() {
        Some(HOME_ROUTE)
    } else {
        None
    };

    match target {
        Some(to) => {
            tracing::debug!(from = path, to, "Navigation redirected");
            Navigation::Redirect(to.to_string())
        }
        None => Navigation::Proceed,
    }
}

/// Follow redirects until a route proceeds
pub fn resolve(path: &str, session: &SessionContext) -> String {
    let mut current = path.to_string();
    // The table has no cycles; the bound only guards future edits
    for _ in 0..ROUTES.len() {
        match guard(&current, session) {
            Navigation::Proceed => return current,
            Navigation::Redirect(next) => current = next,
        }
    }
    current
}
