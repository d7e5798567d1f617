//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared layout to
//! `components`. Access control lives in `router::guard`, not in the pages.

pub mod achievements;
pub mod auth;
pub mod notifications;
pub mod profile;
pub mod register;
pub mod requests;
