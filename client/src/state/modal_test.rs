use super::*;

#[test]
fn latch_refuses_reentry_until_guard_drops() {
    let latch = SubmitLatch::new();
    let guard = latch.try_acquire();
    assert!(guard.is_some());
    assert!(latch.is_held());
    assert!(latch.try_acquire().is_none());
    drop(guard);
    assert!(!latch.is_held());
    assert!(latch.try_acquire().is_some());
}

#[test]
fn clones_share_the_flag() {
    let latch = SubmitLatch::new();
    let other = latch.clone();
    let _guard = latch.try_acquire();
    assert!(other.try_acquire().is_none());
}

#[test]
fn release_reopens_the_latch() {
    let latch = SubmitLatch::new();
    let guard = latch.try_acquire();
    latch.release();
    assert!(latch.try_acquire().is_some());
    drop(guard);
}

#[test]
fn submit_status_reports_failure_text() {
    assert_eq!(SubmitStatus::Failed("name: required".to_owned()).error(), Some("name: required"));
    assert_eq!(SubmitStatus::Idle.error(), None);
    assert!(SubmitStatus::Submitting.is_submitting());
}

#[test]
fn modal_defaults_closed() {
    let modal = ModalState::<u8>::default();
    assert!(!modal.is_open());
    assert!(ModalState::Edit(1_u8).is_open());
}
