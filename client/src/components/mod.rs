//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentation plus a small amount of behavior; session state
//! is passed in as props by the pages that compose them.

pub mod auth_action;
pub mod feature_card;
pub mod icons;
pub mod section_scroller;
