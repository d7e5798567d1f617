//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The portal keeps a single piece of client state: the session token in
//! browser storage. It is read through the `TokenStore` seam so the guard and
//! pages can be exercised without a browser.

pub mod session;
