use super::*;
use records::FileMeta;
use serde_json::json;

#[test]
fn json_when_no_file_is_attached() {
    let form = FormPayload::new()
        .value("name", "Cardiology")
        .optional("track", Some(3_u64))
        .optional("subject", None::<u64>)
        .file("thumbnail", None);
    assert_eq!(Payload::from_form(form), Payload::Json(json!({ "name": "Cardiology", "track": 3 })));
}

#[test]
fn multipart_when_any_file_is_attached() {
    let file = PickedFile::detached(FileMeta::new("t.png", "image/png", 4));
    let form = FormPayload::new().value("name", "Cardiology").file("thumbnail", Some(file.clone()));
    let payload = Payload::from_form(form);
    assert!(matches!(payload, Payload::Multipart(_)));
    assert_eq!(payload.files(), vec![file]);
}

#[test]
fn multipart_text_flattens_values() {
    assert_eq!(multipart_text(&json!("a")), Some("a".to_owned()));
    assert_eq!(multipart_text(&json!(true)), Some("true".to_owned()));
    assert_eq!(multipart_text(&json!(2)), Some("2".to_owned()));
    assert_eq!(multipart_text(&json!({ "k": 1 })), Some("{\"k\":1}".to_owned()));
    assert_eq!(multipart_text(&Value::Null), None);
}
