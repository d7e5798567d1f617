//! Requests page.

use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::router::table::Page;

#[component]
pub fn RequestsPage() -> impl IntoView {
    view! {
        <PageFrame page=Page::Requests>
            <p>"Your requests will appear here."</p>
        </PageFrame>
    }
}
