//! Client state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data. Pages wrap them in `RwSignal`s (shared ones
//! are provided as context by `App`) and all validation and bookkeeping
//! lives here so it can be tested without a browser.

pub mod auth;
pub mod entity_form;
pub mod exam_builder;
pub mod exam_review;
pub mod file_slot;
pub mod import;
pub mod modal;
pub mod question_draft;
pub mod resource;
pub mod toast;
pub mod university_builder;
