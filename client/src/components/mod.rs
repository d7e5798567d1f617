//! Reusable UI components shared by the route pages.

pub mod nav_bar;
pub mod page_frame;
pub mod telegram_login;
