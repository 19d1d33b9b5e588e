use super::*;
use crate::net::payload::FormValue;
use crate::util::files::PickedFile;
use records::{FileMeta, UploadKind};
use serde_json::json;

fn sheet(name: &str, mime: &str) -> PickedFile {
    PickedFile::detached(FileMeta::new(name, mime, 2048))
}

#[test]
fn import_paths_follow_exam_type() {
    assert_eq!(ImportDraft::new(ExamType::Grand).path(), "exams_app/track-exams/import/");
    assert_eq!(ImportDraft::new(ExamType::University).path(), "exams_app/university-exams/import/");
}

#[test]
fn payload_requires_a_file() {
    let draft = ImportDraft::new(ExamType::Grand);
    let scope = ExamScope { subject: Some(3), ..ExamScope::default() };
    assert_eq!(draft.to_payload(&scope), Err(ImportError::NoFile));
}

#[test]
fn rejected_file_leaves_nothing_to_upload() {
    let mut draft = ImportDraft::new(ExamType::Grand);
    let stale = draft.file.offer(UploadKind::Spreadsheet, sheet("exam.docx", "application/msword"));
    assert_eq!(stale.len(), 1);
    assert!(draft.file.is_empty());
    assert!(draft.file.error.is_some());
}

#[test]
fn chapter_import_carries_scope_ids() {
    let mut draft = ImportDraft::new(ExamType::Chapter);
    let _ = draft.file.offer(UploadKind::Spreadsheet, sheet("Quiz.XLSX", ""));
    let scope = ExamScope { track: Some(1), subject: Some(2), chapter: Some(3), university: None };
    let Ok(Payload::Multipart(form)) = draft.to_payload(&scope) else {
        panic!("expected multipart");
    };
    let values: Vec<(&str, serde_json::Value)> = form
        .fields
        .iter()
        .filter_map(|(name, value)| match value {
            FormValue::Value(v) => Some((name.as_str(), v.clone())),
            FormValue::File(_) => None,
        })
        .collect();
    assert_eq!(
        values,
        vec![("exam_type", json!("chapter")), ("track", json!(1)), ("subject", json!(2)), ("chapter", json!(3))]
    );
    assert_eq!(form.files().len(), 1);
}

#[test]
fn missing_scope_is_reported() {
    let mut draft = ImportDraft::new(ExamType::University);
    let _ = draft.file.offer(UploadKind::Spreadsheet, sheet("u.csv", "text/csv"));
    assert_eq!(draft.to_payload(&ExamScope::default()), Err(ImportError::ScopeMissing("university")));
}
