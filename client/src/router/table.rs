//! Static route table for the portal.
//!
//! The table is ordered and immutable. Lookup is by exact path and the first
//! matching entry wins.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Destination of the unconditional `/` redirect.
pub const ROOT_REDIRECT: &str = "/profile";

/// Routed views, one per non-redirect path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Auth,
    Register,
    Profile,
    Achievements,
    Requests,
    Notifications,
}

impl Page {
    /// Every routed view in table order.
    pub const ALL: [Page; 6] = [
        Page::Auth,
        Page::Register,
        Page::Profile,
        Page::Achievements,
        Page::Requests,
        Page::Notifications,
    ];

    /// Views shown in the navigation bar once signed in.
    pub const MENU: [Page; 4] = [Page::Profile, Page::Achievements, Page::Requests, Page::Notifications];

    /// Absolute path, e.g. `/auth`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Page::Auth => "/auth",
            Page::Register => "/register",
            Page::Profile => "/profile",
            Page::Achievements => "/achievements",
            Page::Requests => "/requests",
            Page::Notifications => "/notifications",
        }
    }

    /// Router segment without the leading slash, e.g. `auth`.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Auth => "auth",
            Page::Register => "register",
            Page::Profile => "profile",
            Page::Achievements => "achievements",
            Page::Requests => "requests",
            Page::Notifications => "notifications",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Page::Auth => "Sign in",
            Page::Register => "Register",
            Page::Profile => "Profile",
            Page::Achievements => "Achievements",
            Page::Requests => "Requests",
            Page::Notifications => "Notifications",
        }
    }
}

/// What a route path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(Page),
    Redirect(&'static str),
}

/// One `(path, target)` pair of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub target: RouteTarget,
}

/// The route table, in declaration order.
pub static ROUTES: [RouteEntry; 7] = [
    RouteEntry { path: "/", target: RouteTarget::Redirect(ROOT_REDIRECT) },
    RouteEntry { path: "/auth", target: RouteTarget::View(Page::Auth) },
    RouteEntry { path: "/register", target: RouteTarget::View(Page::Register) },
    RouteEntry { path: "/profile", target: RouteTarget::View(Page::Profile) },
    RouteEntry { path: "/achievements", target: RouteTarget::View(Page::Achievements) },
    RouteEntry { path: "/requests", target: RouteTarget::View(Page::Requests) },
    RouteEntry { path: "/notifications", target: RouteTarget::View(Page::Notifications) },
];

/// Find the route entry for an exact path.
#[must_use]
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Final destination of `path` after following a redirect entry, if any.
#[must_use]
pub fn resolve(path: &str) -> &str {
    match lookup(path) {
        Some(RouteEntry { target: RouteTarget::Redirect(target), .. }) => *target,
        _ => path,
    }
}
