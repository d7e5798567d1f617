//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the host endpoints with Leptos SSR rendering under a
//! single Axum router. `/` is answered here with an HTTP redirect to the
//! profile route; every other routed path is rendered by the Leptos app and
//! then hydrated, after which the client-side guard takes over.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::router::table::ROOT_REDIRECT;

/// Host-owned endpoints that do not go through Leptos.
fn host_routes() -> Router {
    Router::new()
        .route("/", get(redirect_root))
        .route("/healthz", get(healthz))
}

/// Whether a Leptos route path should be registered on the Axum router.
///
/// `/` is owned by [`host_routes`]; registering it twice would panic.
fn served_by_leptos(path: &str) -> bool {
    path != "/"
}

async fn redirect_root() -> Redirect {
    Redirect::temporary(ROOT_REDIRECT)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Host endpoints + Leptos SSR routes + static bundle under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes: Vec<_> = generate_route_list(client::app::App)
        .into_iter()
        .filter(|listing| served_by_leptos(listing.path()))
        .collect();
    tracing::debug!(count = routes.len(), "registering leptos routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(host_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}
