//! Navigation bar linking the signed-in pages.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::router::table::Page;

fn nav_link_class(active: bool) -> &'static str {
    if active { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" }
}

/// Links for [`Page::MENU`], highlighting the current route.
#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav-bar">
            {Page::MENU
                .into_iter()
                .map(|page| {
                    let class = move || nav_link_class(pathname.get() == page.path());
                    view! {
                        <a class=class href=page.path()>
                            {page.title()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
