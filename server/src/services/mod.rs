//! Service layer for the auth adapter.
//!
//! DESIGN
//! ======
//! Route handlers stay thin and delegate provider calls here.

pub mod session;
