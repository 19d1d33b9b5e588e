use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.success("Track created");
    let b = state.error("name: required");
    assert!(b > a);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn oldest_toast_drops_past_the_cap() {
    let mut state = ToastState::default();
    for i in 0..6 {
        state.success(format!("saved {i}"));
    }
    assert_eq!(state.toasts.len(), 4);
    assert_eq!(state.toasts[0].message, "saved 2");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.success("one");
    state.success("two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}
