#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn parse_id_accepts_trimmed_numbers() {
    assert_eq!(parse_id(keys::ID_SUBJECT, Some(" 42 ".to_owned())), Ok(42));
}

#[test]
fn parse_id_rejects_missing_blank_and_garbage() {
    let missing = MissingSelection { key: keys::ID_SUBJECT, what: "subject" };
    assert_eq!(parse_id(keys::ID_SUBJECT, None), Err(missing.clone()));
    assert_eq!(parse_id(keys::ID_SUBJECT, Some(String::new())), Err(missing.clone()));
    assert_eq!(parse_id(keys::ID_SUBJECT, Some("undefined".to_owned())), Err(missing));
}

#[test]
fn missing_selection_names_the_scope() {
    let err = parse_id(keys::CHAPTER_ID, None).unwrap_err();
    assert_eq!(err.to_string(), "No chapter selected. Go back and choose one first.");
    assert_eq!(selection_label(keys::EXAM_ID_UNIVERSITY), "exam");
    assert_eq!(selection_label("something_else"), "item");
}

#[test]
fn storage_is_empty_outside_the_browser() {
    set(keys::ID_TRACK, "3");
    assert_eq!(get(keys::ID_TRACK), None);
    assert!(require_id(keys::ID_TRACK).is_err());
    remove(keys::ID_TRACK);
    clear();
}
