//! Networking modules for the ITAM auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds URLs and performs the login/register calls; `types` defines
//! the wire schema.

pub mod api;
pub mod types;
