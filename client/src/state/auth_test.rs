use super::*;

#[test]
fn default_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn bearer_value_prefixes_once() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
    assert_eq!(bearer_value(" Bearer abc "), "Bearer abc");
}

#[test]
fn signed_in_state_carries_header_value() {
    let state = AuthState::signed_in("tok", Some("Dana".to_owned()), None);
    assert_eq!(state.token.as_deref(), Some("Bearer tok"));
    assert!(!state.loading);
    assert_eq!(state.display_name(), "Dana");
}

#[test]
fn display_name_falls_back_to_email_then_admin() {
    let state = AuthState { user_email: Some("a@b.c".to_owned()), ..AuthState::default() };
    assert_eq!(state.display_name(), "a@b.c");
    assert_eq!(AuthState::default().display_name(), "Admin");
}
