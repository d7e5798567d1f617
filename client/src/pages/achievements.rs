//! Achievements earned by the signed-in user.

use leptos::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::router::table::Page;

#[component]
pub fn AchievementsPage() -> impl IntoView {
    view! {
        <PageFrame page=Page::Achievements>
            <p>"Your achievements will appear here."</p>
        </PageFrame>
    }
}
