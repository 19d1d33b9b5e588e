//! Networking modules for the LMS REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests, `payload` encodes JSON or multipart bodies, and
//! `loader` feeds fetched collections into list-page signals.

pub mod api;
pub mod loader;
pub mod payload;
