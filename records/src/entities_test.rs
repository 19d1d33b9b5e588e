use super::*;

#[test]
fn track_decodes_with_missing_and_null_fields() {
    let track: Track = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Medicine",
        "description": null,
        "has_university": true
    }))
    .expect("track");
    assert_eq!(track.id, 3);
    assert_eq!(track.name, "Medicine");
    assert_eq!(track.description, "");
    assert!(track.has_university);
    assert_eq!(track.thumbnail, None);
}

#[test]
fn actor_accepts_string_number_and_object() {
    let by_name: Track = serde_json::from_value(serde_json::json!({ "created_by": "admin" })).expect("name");
    assert_eq!(by_name.created_by.as_deref(), Some("admin"));

    let by_id: Track = serde_json::from_value(serde_json::json!({ "created_by": 17 })).expect("id");
    assert_eq!(by_id.created_by.as_deref(), Some("17"));

    let by_object: Track =
        serde_json::from_value(serde_json::json!({ "modified_by": { "id": 1, "username": "root" } })).expect("object");
    assert_eq!(by_object.modified_by.as_deref(), Some("root"));
}

#[test]
fn actor_rejects_arrays() {
    let result = serde_json::from_value::<Track>(serde_json::json!({ "created_by": [1, 2] }));
    assert!(result.is_err());
}

#[test]
fn subject_decodes_nested_chapters() {
    let subject: Subject = serde_json::from_value(serde_json::json!({
        "id": 5,
        "name": "Anatomy",
        "chapters": [{ "id": 9, "name": "Bones", "subject": 5 }]
    }))
    .expect("subject");
    assert_eq!(subject.chapters.len(), 1);
    assert_eq!(subject.chapters[0].subject, Some(5));
}

#[test]
fn track_search_fields_include_creator() {
    let track = Track {
        name: "Dentistry".to_owned(),
        description: "Oral health".to_owned(),
        created_by: Some("dr.lee".to_owned()),
        ..Track::default()
    };
    assert_eq!(track.search_fields(), vec!["Dentistry", "Oral health", "dr.lee"]);
}

#[test]
fn soft_deleted_notes_and_videos_are_hidden() {
    let note = Note { is_deleted: true, ..Note::default() };
    let video = Video::default();
    assert!(note.is_hidden());
    assert!(!video.is_hidden());
}
