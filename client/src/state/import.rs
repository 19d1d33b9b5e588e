//! Spreadsheet import form.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use records::ExamType;

use crate::net::payload::{FormPayload, Payload};
use crate::state::exam_builder::ExamScope;
use crate::state::file_slot::FileSlot;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Choose a spreadsheet to import")]
    NoFile,
    #[error("No {0} selected. Go back and choose one first.")]
    ScopeMissing(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportDraft {
    pub exam_type: ExamType,
    pub file: FileSlot,
}

impl ImportDraft {
    #[must_use]
    pub fn new(exam_type: ExamType) -> Self {
        Self { exam_type, file: FileSlot::default() }
    }

    /// Import endpoint for this exam type.
    #[must_use]
    pub fn path(&self) -> String {
        let resource = self.exam_type.resource();
        resource.import().unwrap_or_else(|| resource.collection().to_owned())
    }

    /// Multipart body: the file, the exam type and the scope ids.
    ///
    /// # Errors
    ///
    /// No file chosen, or the scoping id is missing.
    pub fn to_payload(&self, scope: &ExamScope) -> Result<Payload, ImportError> {
        let file = self.file.file.clone().ok_or(ImportError::NoFile)?;
        let (key, id) = scope.require(self.exam_type).map_err(|_| ImportError::ScopeMissing(scope_key(self.exam_type)))?;
        let mut form = FormPayload::new()
            .file("file", Some(file))
            .value("exam_type", self.exam_type.as_str())
            .optional("track", scope.track);
        if self.exam_type == ExamType::Chapter {
            form = form.optional("subject", scope.subject);
        }
        form = form.value(key, id);
        Ok(Payload::from_form(form))
    }
}

fn scope_key(exam_type: ExamType) -> &'static str {
    match exam_type {
        ExamType::Grand => "subject",
        ExamType::Chapter => "chapter",
        ExamType::University => "university",
    }
}
