use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::router::table::Page;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    view! {
        <PageFrame page=Page::Notifications>
            <p>"You have no notifications."</p>
        </PageFrame>
    }
}
