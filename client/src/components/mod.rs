//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, tables and modals while reading and
//! writing shared state from Leptos context providers.

pub mod confirm_delete;
pub mod crud_modals;
pub mod dashboard_layout;
pub mod dialog;
pub mod entity_form_modal;
pub mod exam_list;
pub mod file_drop_zone;
pub mod import_modal;
pub mod markdown_preview;
pub mod question_composer;
pub mod question_table;
pub mod resource_table;
pub mod selection_notice;
pub mod toast_host;
