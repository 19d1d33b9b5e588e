//! Browser `sessionStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session storage is the only state shared between dashboard pages: the
//! bearer token plus the ids and names of whatever the user clicked into
//! (track → subject → chapter, track → university, exam). It is written
//! synchronously with no cross-tab coordination; last writer wins.
//!
//! Reads are hydrate-only. SSR sees an empty store, so pages resolve their
//! selection in an effect after mount (see [`use_selection`]) instead of
//! during render, which keeps server and client markup identical.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use records::RecordId;

/// Storage keys used as inter-page transport.
pub mod keys {
    pub const AUTHORIZATION: &str = "Authorization";
    pub const USER_NAME: &str = "user_name";
    pub const USER_EMAIL: &str = "user_email";
    pub const ID_TRACK: &str = "id_track";
    pub const TRACK_NAME: &str = "track_name";
    pub const ID_SUBJECT: &str = "id_subject";
    pub const SUBJECT_NAME: &str = "subject_name";
    pub const SUBJECT_DESCRIPTION: &str = "subject_description";
    pub const ID_UNIVERSITY: &str = "id_university";
    pub const UNIVERSITY_NAME: &str = "university_name";
    pub const CHAPTER_ID: &str = "chapter_id";
    pub const CHAPTER_NAME: &str = "chapter_name";
    pub const CHAPTER_DESCRIPTION: &str = "chapter_description";
    pub const EXAM_ID_TRACK: &str = "exam_id_track";
    pub const EXAM_ID_UNIVERSITY: &str = "exam_id_university";
    pub const IS_PRACTICE_EXAM_TRACK: &str = "is_practice_exam_track";
    pub const IS_PRACTICE_EXAM_UNIVERSITY: &str = "is_practice_exam_university";
    pub const NOTE_NAME: &str = "note_name";
    pub const NOTE_SOURCE: &str = "note_source";
    pub const VIDEO_NAME: &str = "video_name";
    pub const VIDEO_URL: &str = "video_url";
}

/// A page was opened without the id it is scoped to.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("No {what} selected. Go back and choose one first.")]
pub struct MissingSelection {
    pub key: &'static str,
    pub what: &'static str,
}

/// State of a page's required session id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Not read yet (SSR and the first client render).
    Pending,
    Ready(RecordId),
    Missing(MissingSelection),
}

/// What a selection key refers to, for error text.
#[must_use]
pub fn selection_label(key: &str) -> &'static str {
    match key {
        keys::ID_TRACK => "track",
        keys::ID_SUBJECT => "subject",
        keys::ID_UNIVERSITY => "university",
        keys::CHAPTER_ID => "chapter",
        keys::EXAM_ID_TRACK | keys::EXAM_ID_UNIVERSITY => "exam",
        _ => "item",
    }
}

/// Parse a stored id. Missing, blank, and non-numeric values all count as
/// no selection.
///
/// # Errors
///
/// Returns [`MissingSelection`] for `key` when `raw` is not a usable id.
pub fn parse_id(key: &'static str, raw: Option<String>) -> Result<RecordId, MissingSelection> {
    raw.as_deref()
        .map(str::trim)
        .and_then(|value| value.parse::<RecordId>().ok())
        .ok_or(MissingSelection { key, what: selection_label(key) })
}

#[must_use]
pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Write several keys at once before navigating to a child page.
pub fn set_all(pairs: &[(&str, String)]) {
    for (key, value) in pairs {
        set(key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Drop everything, including the bearer token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.clear();
        }
    }
}

/// Read the id stored under `key`.
///
/// # Errors
///
/// Returns [`MissingSelection`] when the key is absent or not an id.
pub fn require_id(key: &'static str) -> Result<RecordId, MissingSelection> {
    parse_id(key, get(key))
}

/// Reactive selection for `key`, resolved once after mount.
pub fn use_selection(key: &'static str) -> RwSignal<Selection> {
    let selection = RwSignal::new(Selection::Pending);
    Effect::new(move || {
        selection.set(match require_id(key) {
            Ok(id) => Selection::Ready(id),
            Err(missing) => Selection::Missing(missing),
        });
    });
    selection
}

/// Reactive text value for `key` (names and descriptions shown in headers).
pub fn use_text(key: &'static str) -> RwSignal<String> {
    let text = RwSignal::new(String::new());
    Effect::new(move || text.set(get(key).unwrap_or_default()));
    text
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}
