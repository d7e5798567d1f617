//! Telegram login widget and parsing of its redirect payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget runs in redirect mode: after the user confirms in Telegram, the
//! browser is sent back to `data-auth-url` with the signed profile fields in
//! the query string. `/auth` and `/register` both read that payload and
//! forward it to the API.

#[cfg(test)]
#[path = "telegram_login_test.rs"]
mod telegram_login_test;

use leptos::prelude::*;

use crate::net::types::TelegramAuth;

/// Bot username rendered into the widget, fixed at compile time.
pub const TELEGRAM_BOT_NAME: &str = match option_env!("TELEGRAM_BOT_NAME") {
    Some(name) => name,
    None => "itam_auth_bot",
};

const WIDGET_SCRIPT_SRC: &str = "https://telegram.org/js/telegram-widget.js?22";

pub const INCOMPLETE_PAYLOAD: &str = "Telegram response is incomplete. Please try again.";
pub const INVALID_PAYLOAD: &str = "Telegram response is malformed. Please try again.";

/// Whether the query string carries a widget redirect at all.
pub fn has_widget_payload<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("hash").is_some_and(|hash| !hash.is_empty())
}

/// Build a [`TelegramAuth`] from widget redirect query parameters.
///
/// `id`, `first_name`, `auth_date` and `hash` are required; the remaining
/// fields default to empty strings.
///
/// # Errors
///
/// Returns a user-facing message when a required field is missing or a
/// numeric field does not parse.
pub fn telegram_auth_from_query<F>(lookup: F) -> Result<TelegramAuth, &'static str>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(INCOMPLETE_PAYLOAD)
    };
    let optional = |key: &str| lookup(key).map(|value| value.trim().to_owned()).unwrap_or_default();

    let id = required("id")?.parse::<i64>().map_err(|_| INVALID_PAYLOAD)?;
    let first_name = required("first_name")?;
    let auth_date = required("auth_date")?.parse::<i64>().map_err(|_| INVALID_PAYLOAD)?;
    let hash = required("hash")?;

    Ok(TelegramAuth {
        id,
        first_name,
        last_name: optional("last_name"),
        username: optional("username"),
        photo_url: optional("photo_url"),
        auth_date,
        hash,
    })
}

/// Embed the Telegram login widget, redirecting back to `auth_url`.
#[component]
pub fn TelegramLogin(auth_url: &'static str) -> impl IntoView {
    view! {
        <div class="telegram-login">
            <script
                src=WIDGET_SCRIPT_SRC
                data-telegram-login=TELEGRAM_BOT_NAME
                data-size="large"
                data-auth-url=auth_url
                data-request-access="write"
            ></script>
        </div>
    }
}
