//! Common layout for signed-in pages: navigation bar plus titled body.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::router::table::Page;

#[component]
pub fn PageFrame(page: Page, children: Children) -> impl IntoView {
    view! {
        <div class="page">
            <NavBar/>
            <main class="page__body">
                <h1>{page.title()}</h1>
                {children()}
            </main>
        </div>
    }
}
