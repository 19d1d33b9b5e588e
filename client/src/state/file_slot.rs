//! One file input's selection plus its validation error.

#[cfg(test)]
#[path = "file_slot_test.rs"]
mod file_slot_test;

use records::UploadKind;
use records::upload::validate;

use crate::util::files::PickedFile;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSlot {
    pub file: Option<PickedFile>,
    pub error: Option<String>,
}

impl FileSlot {
    /// Offer a newly picked file. Returns files the caller must release:
    /// the replaced selection on success, or the rejected file itself.
    /// A rejected file leaves the slot empty with the validation message.
    pub fn offer(&mut self, kind: UploadKind, picked: PickedFile) -> Vec<PickedFile> {
        let mut stale: Vec<PickedFile> = self.file.take().into_iter().collect();
        match validate(kind, &picked.meta) {
            Ok(()) => {
                self.file = Some(picked);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                stale.push(picked);
            }
        }
        stale
    }

    /// Move the selection out (for upload).
    pub fn take(&mut self) -> Option<PickedFile> {
        self.error = None;
        self.file.take()
    }

    /// Drop selection and error; returns the file to release.
    pub fn clear(&mut self) -> Option<PickedFile> {
        self.take()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file.is_none()
    }
}
