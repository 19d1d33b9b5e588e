use super::*;
use serde_json::json;

#[test]
fn endpoint_joins_base_and_path() {
    assert!(endpoint("tracks_app/tracks/").ends_with("/tracks_app/tracks/"));
    assert!(!endpoint("/tracks_app/tracks/").contains("//tracks_app"));
}

#[test]
fn failure_maps_401_to_unauthorized() {
    assert_eq!(failure(401, r#"{"detail":"Token expired"}"#), ApiError::Unauthorized);
    assert_eq!(ApiError::Unauthorized.to_string(), "Session expired or unauthorized");
}

#[test]
fn failure_summarizes_field_errors() {
    let err = failure(400, r#"{"name":["This field is required."]}"#);
    assert_eq!(err.to_string(), "name: This field is required.");
}

#[test]
fn failure_on_html_body_falls_back_to_status() {
    assert_eq!(failure(502, "<html>Bad gateway</html>").to_string(), "request failed (HTTP 502)");
}

#[test]
fn parse_body_handles_empty_and_invalid() {
    assert_eq!(parse_body("  "), Ok(Value::Null));
    assert_eq!(parse_body(r#"{"id":1}"#), Ok(json!({ "id": 1 })));
    assert!(matches!(parse_body("not json"), Err(ApiError::Decode(_))));
}

#[test]
fn parse_login_reads_token_and_user() {
    let body = json!({ "access": "abc", "user": { "username": "dana", "email": "d@x.io" } });
    let login = parse_login(&body, "typed@x.io").expect("login");
    assert_eq!(login.token, "abc");
    assert_eq!(login.user_name.as_deref(), Some("dana"));
    assert_eq!(login.user_email.as_deref(), Some("d@x.io"));
}

#[test]
fn parse_login_falls_back_to_typed_email() {
    let login = parse_login(&json!({ "token": "t" }), "typed@x.io").expect("login");
    assert_eq!(login.user_name, None);
    assert_eq!(login.user_email.as_deref(), Some("typed@x.io"));
    assert!(parse_login(&json!({}), "typed@x.io").is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn authorization_requires_a_stored_token() {
    assert_eq!(authorization(), Err(ApiError::MissingToken));
}
