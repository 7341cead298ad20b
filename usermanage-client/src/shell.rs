//! Client-side routes and the session-derived navigation model.

use crate::session::Session;
use std::fmt;

/// Client-side routes. The dashboard entry is gated in navigation only;
/// the route itself is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Logout,
    Register,
    Profile,
    Dashboard,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Login,
            Route::Logout,
            Route::Register,
            Route::Profile,
            Route::Dashboard,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Logout => "/logout",
            Route::Register => "/register",
            Route::Profile => "/profile",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::all()
            .iter()
            .copied()
            .find(|route| route.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation entries visible for a session snapshot, in display order.
/// Home always shows; Profile/Logout need a token; the dashboard entry
/// additionally needs the staff or superuser flag.
pub fn nav_routes(session: &Session) -> Vec<Route> {
    let mut routes = vec![Route::Home];
    if session.is_authenticated() {
        routes.push(Route::Profile);
        if session.can_view_dashboard() {
            routes.push(Route::Dashboard);
        }
        routes.push(Route::Logout);
    } else {
        routes.push(Route::Login);
        routes.push(Route::Register);
    }
    routes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for &route in Route::all() {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
        assert_eq!(Route::parse("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/nope"), None);
    }

    #[test]
    fn anonymous_nav_offers_login_and_register() {
        let routes = nav_routes(&Session::anonymous());
        assert_eq!(routes, vec![Route::Home, Route::Login, Route::Register]);
    }

    #[test]
    fn plain_user_nav_has_no_dashboard() {
        let session = Session {
            token: Some("tok".into()),
            is_superuser: false,
            is_staff: false,
        };
        let routes = nav_routes(&session);
        assert_eq!(routes, vec![Route::Home, Route::Profile, Route::Logout]);
    }

    #[test]
    fn staff_and_superusers_see_the_dashboard() {
        for (is_superuser, is_staff) in [(true, false), (false, true), (true, true)] {
            let session = Session {
                token: Some("tok".into()),
                is_superuser,
                is_staff,
            };
            assert!(nav_routes(&session).contains(&Route::Dashboard));
        }
    }
}
