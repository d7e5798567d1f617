//! Client-side routing: the static route table and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` is pure configuration consumed by `app` when building the Leptos
//! router. `guard` decides, per navigation, whether the destination is
//! reachable given the current session token.

pub mod guard;
pub mod table;
