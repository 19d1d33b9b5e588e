//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (session storage, file handles,
//! location changes) from page and component logic so the rest of the crate
//! can be tested natively.

pub mod auth;
pub mod files;
pub mod markdown;
pub mod nav;
pub mod session;
