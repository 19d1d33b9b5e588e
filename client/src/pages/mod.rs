//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session selection, fetches,
//! navigation) and delegates rendering details to `components`.

pub mod chapter;
pub mod chapters;
pub mod content_preview;
pub mod exam_builder;
pub mod exam_review;
pub mod grand_tests;
pub mod login;
pub mod subjects;
pub mod tracks;
pub mod universities;
pub mod university_builder;
pub mod university_tests;
