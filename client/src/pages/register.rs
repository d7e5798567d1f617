//! Registration page using the Telegram login widget.
//!
//! A signed Telegram payload creates the account; the user is then sent to
//! `/auth` to sign in with the same widget.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::telegram_login::{TelegramLogin, has_widget_payload, telegram_auth_from_query};
use crate::router::table::Page;

pub fn registration_failed_message(reason: &str) -> String {
    format!("Registration failed: {reason}")
}

#[component]
pub fn RegisterPage() -> impl IntoView {
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
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&payload).await {
                Ok(message) => {
                    leptos::logging::log!("registered: {message}");
                    if let Some(window) = web_sys::window() {
                        if window.location().set_href(Page::Auth.path()).is_err() {
                            leptos::logging::warn!("failed to leave registration page");
                        }
                    }
                }
                Err(e) => {
                    info.set(registration_failed_message(&e.to_string()));
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
                <p class="auth-card__subtitle">{Page::Register.title()}</p>
                <TelegramLogin auth_url=Page::Register.path()/>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=Page::Auth.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
