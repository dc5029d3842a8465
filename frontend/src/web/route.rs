//! Route definitions, the domain model of navigation.
//!
//! Pure logic, no DOM or web_sys dependency, so the guard rules are
//! unit-testable off the browser.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public landing hub (default route)
    #[default]
    Landing,
    /// Citizen report wizard (public)
    Citizen,
    /// Staff login form
    Login,
    /// Municipality dashboard (session required)
    Municipality,
    NotFound,
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Landing,
            "/citizen" => Self::Citizen,
            "/login" => Self::Login,
            "/municipality" => Self::Municipality,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Citizen => "/citizen",
            Self::Login => "/login",
            Self::Municipality => "/municipality",
            Self::NotFound => "/404",
        }
    }

    /// Whether this route sits behind the session gate.
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::Municipality)
    }

    /// Whether an active session should bounce the user off this route
    /// (visiting the login form while already signed in).
    pub fn redirects_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }
}

/// Resolve the session guard: given the requested route and the session
/// flag, return the route that actually loads.
pub fn apply_guard(target: AppRoute, is_authenticated: bool) -> AppRoute {
    if target.requires_session() && !is_authenticated {
        AppRoute::Login
    } else if target.redirects_when_authenticated() && is_authenticated {
        AppRoute::Municipality
    } else {
        target
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Landing,
            AppRoute::Citizen,
            AppRoute::Login,
            AppRoute::Municipality,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn guard_blocks_municipality_without_session() {
        assert_eq!(
            apply_guard(AppRoute::Municipality, false),
            AppRoute::Login
        );
        assert_eq!(
            apply_guard(AppRoute::Municipality, true),
            AppRoute::Municipality
        );
    }

    #[test]
    fn guard_bounces_authenticated_users_off_login() {
        assert_eq!(apply_guard(AppRoute::Login, true), AppRoute::Municipality);
        assert_eq!(apply_guard(AppRoute::Login, false), AppRoute::Login);
    }

    #[test]
    fn public_routes_pass_through() {
        for auth in [false, true] {
            assert_eq!(apply_guard(AppRoute::Landing, auth), AppRoute::Landing);
            assert_eq!(apply_guard(AppRoute::Citizen, auth), AppRoute::Citizen);
        }
    }
}
