//! Sign-in page using the Telegram login widget.
//!
//! When Telegram redirects back here with a signed payload, the page
//! exchanges it for a session token, stores the token, and moves on to the
//! profile.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::telegram_login::{TelegramLogin, has_widget_payload, telegram_auth_from_query};
use crate::router::table::Page;

pub fn login_failed_message(reason: &str) -> String {
    format!("Sign-in failed: {reason}")
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let query = use_query_map();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let params = query.get();
        if !has_widget_payload(|key| params.get(key)) || busy.get_untracked() {
            return;
        }
        let payload = match telegram_auth_from_query(|key| params.get(key)) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::session::{BrowserTokenStore, TokenStore};

            match crate::net::api::login(&payload).await {
                Ok(token) => {
                    BrowserTokenStore.store_token(&token);
                    if let Some(window) = web_sys::window() {
                        if window.location().set_href(crate::router::guard::SIGNED_IN_REDIRECT).is_err() {
                            leptos::logging::warn!("failed to leave sign-in page");
                        }
                    }
                }
                Err(e) => {
                    info.set(login_failed_message(&e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"ITAM"</h1>
                <p class="auth-card__subtitle">{Page::Auth.title()}</p>
                <TelegramLogin auth_url=Page::Auth.path()/>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=Page::Register.path()>"Register"</a>
                </p>
            </div>
        </div>
    }
}
