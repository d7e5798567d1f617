//! Navigation guard deciding whether a route transition may proceed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every location change inside the router is evaluated here before the user
//! sees the destination. Signed-out users are kept on the public pages and
//! signed-in users are kept off them.
//!
//! DESIGN
//! ======
//! `decide` is a pure function of `(destination, token present)` returning a
//! tagged decision. Token presence is injected through `TokenStore`, and the
//! `RouteGuard` component is the only place that dispatches navigation.
//! Rules, checked in order:
//!
//! 1. non-public destination without a token redirects to `/auth`;
//! 2. public destination with a token redirects to `/profile`;
//! 3. anything else proceeds unchanged.
//!
//! Paths compare by exact string equality, so `/auth/` is not public.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::router::table::{Page, resolve};
use crate::state::session::{BrowserTokenStore, TokenStore};

/// Destinations reachable without a session token.
pub const PUBLIC_PATHS: [&str; 2] = [Page::Auth.path(), Page::Register.path()];

/// Where signed-out users are sent.
pub const SIGNED_OUT_REDIRECT: &str = Page::Auth.path();

/// Where signed-in users are sent when they open a public page.
pub const SIGNED_IN_REDIRECT: &str = Page::Profile.path();

/// A single attempted route transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Destination path.
    pub to: String,
    /// Path the user is leaving, `None` on the initial load.
    pub from: Option<String>,
}

impl NavigationRequest {
    #[must_use]
    pub fn new(to: impl Into<String>, from: Option<String>) -> Self {
        Self { to: to.into(), from }
    }
}

/// Outcome of evaluating one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Proceed to the requested destination unmodified.
    Allow,
    /// Replace the destination with this path.
    Redirect(&'static str),
}

/// Whether `path` is reachable without a session token.
#[must_use]
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Decide the outcome for destination `to` given token presence.
#[must_use]
pub fn decide(to: &str, has_token: bool) -> NavigationDecision {
    let public = is_public(to);
    if !public && !has_token {
        return NavigationDecision::Redirect(SIGNED_OUT_REDIRECT);
    }
    if public && has_token {
        return NavigationDecision::Redirect(SIGNED_IN_REDIRECT);
    }
    NavigationDecision::Allow
}

/// Evaluate `request` against the token presence reported by `store`.
pub fn evaluate(request: &NavigationRequest, store: &impl TokenStore) -> NavigationDecision {
    let decision = decide(&request.to, store.has_token());
    if let NavigationDecision::Redirect(target) = decision {
        leptos::logging::log!(
            "route guard: {} -> {} redirected to {target}",
            request.from.as_deref().unwrap_or("<initial>"),
            request.to
        );
    }
    decision
}

/// Apply the guard to every location change of the enclosing router.
///
/// Must be mounted inside `<Router>`. Redirect entries of the route table are
/// followed before evaluation, so `/` is judged as `/profile`. Redirects
/// replace the history entry so the back button does not return to the
/// blocked destination.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |from: Option<String>| {
        let to = location.pathname.get();
        let request = NavigationRequest::new(resolve(&to), from);
        if let NavigationDecision::Redirect(target) = evaluate(&request, &BrowserTokenStore) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        to
    });
}
