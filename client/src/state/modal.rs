//! Modal open/close state and async submit status.
//!
//! Each screen owns its own instances; nothing here is shared globally.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Progress of one async action (save, delete, import).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Which modal a list page is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Create,
    Edit(T),
    Delete(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> ModalState<T> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Re-entry guard for a submit handler.
///
/// The flag is checked synchronously before the async body starts, so a
/// double click cannot post twice. Clones share the flag.
#[derive(Clone, Debug, Default)]
pub struct SubmitLatch(Arc<AtomicBool>);

/// Held for the duration of a submission; dropping it releases the latch.
#[derive(Debug)]
pub struct SubmitGuard(Arc<AtomicBool>);

impl SubmitLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the latch, or `None` if a submission is already running.
    #[must_use]
    pub fn try_acquire(&self) -> Option<SubmitGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard(self.0.clone()))
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Force the latch open (component unmount).
    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
