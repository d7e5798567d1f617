//! Root application component with routing and the navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    achievements::AchievementsPage, auth::AuthPage, notifications::NotificationsPage, profile::ProfilePage,
    register::RegisterPage, requests::RequestsPage,
};
use crate::router::guard::RouteGuard;
use crate::router::table::{Page, ROOT_REDIRECT};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Mirrors the route table in `router::table`; `RouteGuard` runs on every
/// location change before the matched page settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/itam.css"/>
        <Title text="ITAM"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=ROOT_REDIRECT/> }/>
                <Route path=StaticSegment(Page::Auth.segment()) view=AuthPage/>
                <Route path=StaticSegment(Page::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(Page::Profile.segment()) view=ProfilePage/>
                <Route path=StaticSegment(Page::Achievements.segment()) view=AchievementsPage/>
                <Route path=StaticSegment(Page::Requests.segment()) view=RequestsPage/>
                <Route path=StaticSegment(Page::Notifications.segment()) view=NotificationsPage/>
            </Routes>
        </Router>
    }
}
