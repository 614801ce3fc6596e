//! Wire DTOs shared by the client and the server's auth adapter.
//!
//! DESIGN
//! ======
//! The server depends on this crate, so these types are the single schema for
//! `/api/auth/session` on both sides of the boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `GET /api/auth/session`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Whether the auth provider recognised the visitor's session.
    pub authenticated: bool,
}
