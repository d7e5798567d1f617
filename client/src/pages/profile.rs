//! Profile page, the signed-in landing route. Hosts the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_frame::PageFrame;
use crate::router::guard::SIGNED_OUT_REDIRECT;
use crate::router::table::Page;
use crate::state::session::{BrowserTokenStore, TokenStore};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move |_| {
        BrowserTokenStore.clear_token();
        navigate(SIGNED_OUT_REDIRECT, NavigateOptions::default());
    };

    view! {
        <PageFrame page=Page::Profile>
            <p>"You are signed in."</p>
            <button class="logout-button" on:click=on_logout>
                "Log out"
            </button>
        </PageFrame>
    }
}
