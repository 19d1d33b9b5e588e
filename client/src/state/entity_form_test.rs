use super::*;
use records::FileMeta;
use serde_json::json;

#[test]
fn name_is_required() {
    let draft = EntityDraft::create(None);
    assert_eq!(draft.validate(EntityKind::Track, false), Err(DraftError::NameRequired));
}

#[test]
fn note_needs_pdf_on_create_only() {
    let mut draft = EntityDraft { name: "Lecture 1".to_owned(), parent: Some(4), ..EntityDraft::default() };
    assert_eq!(draft.validate(EntityKind::Note, false), Err(DraftError::AttachmentRequired("PDF")));
    assert_eq!(draft.validate(EntityKind::Note, true), Ok(()));
    draft.id = Some(9);
    assert_eq!(draft.validate(EntityKind::Note, false), Ok(()));
}

#[test]
fn child_entities_need_a_parent_on_create() {
    let draft = EntityDraft { name: "Anatomy".to_owned(), ..EntityDraft::default() };
    assert_eq!(draft.validate(EntityKind::Subject, false), Err(DraftError::ParentMissing("Subject")));
    assert_eq!(draft.validate(EntityKind::Track, false), Ok(()));
}

#[test]
fn track_payload_is_json_with_university_flag() {
    let draft = EntityDraft { name: " Nursing ".to_owned(), has_university: true, ..EntityDraft::default() };
    assert_eq!(
        draft.to_payload(EntityKind::Track, None, None),
        Payload::Json(json!({ "name": "Nursing", "description": "", "has_university": true }))
    );
}

#[test]
fn video_payload_goes_multipart_with_parent() {
    let draft = EntityDraft { name: "Intro".to_owned(), parent: Some(7), ..EntityDraft::default() };
    let clip = PickedFile::detached(FileMeta::new("intro.mp4", "video/mp4", 99));
    let Payload::Multipart(form) = draft.to_payload(EntityKind::Video, None, Some(clip)) else {
        panic!("expected multipart");
    };
    let names: Vec<&str> = form.fields.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["name", "description", "chapter", "video"]);
}

#[test]
fn request_picks_post_or_patch() {
    let mut draft = EntityDraft::create(Some(2));
    assert_eq!(draft.request(EntityKind::Chapter), (Method::Post, "tracks_app/chapters/".to_owned()));
    draft.id = Some(11);
    assert_eq!(draft.request(EntityKind::Chapter), (Method::Patch, "tracks_app/chapters/11/".to_owned()));
}

#[test]
fn editable_copies_record_fields() {
    let subject = Subject { id: 3, name: "Physiology".to_owned(), track: Some(1), ..Subject::default() };
    let draft = subject.draft();
    assert_eq!(draft.id, Some(3));
    assert_eq!(draft.parent, Some(1));
    assert_eq!(<Subject as Editable>::KIND, EntityKind::Subject);
}
