use super::*;
use records::FileMeta;

fn picked(name: &str, mime: &str, size: u64) -> PickedFile {
    PickedFile::detached(FileMeta::new(name, mime, size))
}

#[test]
fn valid_file_is_kept() {
    let mut slot = FileSlot::default();
    let stale = slot.offer(UploadKind::Spreadsheet, picked("exam.xlsx", "", 100));
    assert!(stale.is_empty());
    assert_eq!(slot.file.as_ref().map(|f| f.meta.name.as_str()), Some("exam.xlsx"));
    assert_eq!(slot.error, None);
}

#[test]
fn rejected_file_empties_the_slot() {
    let mut slot = FileSlot::default();
    let _ = slot.offer(UploadKind::Spreadsheet, picked("exam.csv", "text/csv", 10));
    let stale = slot.offer(UploadKind::Spreadsheet, picked("exam.pdf", "application/pdf", 10));
    assert_eq!(stale.len(), 2);
    assert!(slot.is_empty());
    assert_eq!(slot.error.as_deref(), Some("exam.pdf is not a supported spreadsheet (.xlsx or .csv) file"));
}

#[test]
fn replacing_returns_previous_file() {
    let mut slot = FileSlot::default();
    let _ = slot.offer(UploadKind::Image, picked("a.png", "image/png", 10));
    let stale = slot.offer(UploadKind::Image, picked("b.png", "image/png", 10));
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].meta.name, "a.png");
}

#[test]
fn take_clears_error_and_selection() {
    let mut slot = FileSlot::default();
    let _ = slot.offer(UploadKind::Video, picked("clip.mp4", "video/mp4", 10));
    assert!(slot.take().is_some());
    assert!(slot.is_empty());
    assert!(slot.clear().is_none());
}
