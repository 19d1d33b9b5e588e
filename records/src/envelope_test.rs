use super::*;
use crate::entities::Track;
use serde_json::json;

#[test]
fn decode_list_accepts_all_wrappers() {
    let bare: Vec<Track> = decode_list(json!([{ "id": 1 }, { "id": 2 }])).expect("bare");
    assert_eq!(bare.len(), 2);

    let paged: Vec<Track> = decode_list(json!({ "count": 1, "results": [{ "id": 3 }] })).expect("results");
    assert_eq!(paged[0].id, 3);

    let wrapped: Vec<Track> = decode_list(json!({ "data": [{ "id": 4 }] })).expect("data");
    assert_eq!(wrapped[0].id, 4);
}

#[test]
fn decode_list_rejects_scalars() {
    assert!(decode_list::<Track>(json!("nope")).is_err());
}

#[test]
fn decode_one_unwraps_data() {
    let track: Track = decode_one(json!({ "data": { "id": 9, "name": "Nursing" } })).expect("wrapped");
    assert_eq!(track.name, "Nursing");
    let track: Track = decode_one(json!({ "id": 9, "data": "ignored-shape" })).expect("plain");
    assert_eq!(track.id, 9);
}

#[test]
fn token_prefers_access_then_token_then_key() {
    assert_eq!(extract_token(&json!({ "access": "a", "token": "t" })).as_deref(), Some("a"));
    assert_eq!(extract_token(&json!({ "token": "t" })).as_deref(), Some("t"));
    assert_eq!(extract_token(&json!({ "key": "k" })).as_deref(), Some("k"));
    assert_eq!(extract_token(&json!({ "access": "" })), None);
    assert_eq!(extract_token(&json!({})), None);
}

#[test]
fn unauthorized_has_fixed_message() {
    assert_eq!(error_message(401, &json!({ "detail": "Invalid token." })), "Session expired or unauthorized");
}

#[test]
fn error_message_prefers_detail_fields() {
    assert_eq!(error_message(400, &json!({ "detail": "Not allowed" })), "Not allowed");
    assert_eq!(error_message(500, &json!({ "message": "boom" })), "boom");
    assert_eq!(error_message(400, &json!({ "non_field_errors": ["Bad pair"] })), "Bad pair");
}

#[test]
fn error_message_reports_first_field_error() {
    assert_eq!(error_message(400, &json!({ "name": ["This field is required."] })), "name: This field is required.");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, &Value::Null), "request failed (HTTP 502)");
    assert_eq!(error_message(404, &json!({})), "request failed (HTTP 404)");
    assert_eq!(error_message(500, &json!("  ")), "request failed (HTTP 500)");
}
