//! Networking modules for the auth adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the session probe and sign-in hand-off; `types` defines the
//! wire schema shared with the server.

pub mod api;
pub mod types;
