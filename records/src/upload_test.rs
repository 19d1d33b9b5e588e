use super::*;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[test]
fn extension_is_lowercased_and_requires_stem() {
    assert_eq!(FileMeta::new("Exam.XLSX", "", 1).extension().as_deref(), Some("xlsx"));
    assert_eq!(FileMeta::new(".csv", "", 1).extension(), None);
    assert_eq!(FileMeta::new("noext", "", 1).extension(), None);
    assert_eq!(FileMeta::new("trailing.", "", 1).extension(), None);
}

#[test]
fn spreadsheet_accepts_xlsx_and_csv() {
    assert_eq!(validate(UploadKind::Spreadsheet, &FileMeta::new("grand.xlsx", XLSX_MIME, 2048)), Ok(()));
    assert_eq!(validate(UploadKind::Spreadsheet, &FileMeta::new("grand.csv", "text/csv", 10)), Ok(()));
    assert_eq!(
        validate(UploadKind::Spreadsheet, &FileMeta::new("grand.csv", "application/vnd.ms-excel", 10)),
        Ok(())
    );
    assert_eq!(validate(UploadKind::Spreadsheet, &FileMeta::new("grand.csv", "", 10)), Ok(()));
}

#[test]
fn spreadsheet_rejects_wrong_extension_or_mime() {
    let err = validate(UploadKind::Spreadsheet, &FileMeta::new("grand.xls", "application/vnd.ms-excel", 10));
    assert!(matches!(err, Err(UploadError::UnsupportedType { .. })));

    let err = validate(UploadKind::Spreadsheet, &FileMeta::new("grand.csv", "application/pdf", 10));
    assert!(matches!(err, Err(UploadError::UnsupportedType { .. })));

    let err = validate(UploadKind::Spreadsheet, &FileMeta::new("notes.pdf", "application/pdf", 10)).unwrap_err();
    assert_eq!(err.to_string(), "notes.pdf is not a supported spreadsheet (.xlsx or .csv) file");
}

#[test]
fn image_limit_is_ten_megabytes() {
    assert_eq!(validate(UploadKind::Image, &FileMeta::new("a.png", "image/png", MAX_IMAGE_BYTES)), Ok(()));
    let err = validate(UploadKind::Image, &FileMeta::new("a.png", "image/png", MAX_IMAGE_BYTES + 1)).unwrap_err();
    assert_eq!(err.to_string(), "a.png exceeds the 10 MB limit for image files");
}

#[test]
fn video_limit_is_one_hundred_megabytes() {
    assert_eq!(validate(UploadKind::Video, &FileMeta::new("l.mp4", "video/mp4", MAX_VIDEO_BYTES)), Ok(()));
    assert!(matches!(
        validate(UploadKind::Video, &FileMeta::new("l.mp4", "video/mp4", MAX_VIDEO_BYTES + 1)),
        Err(UploadError::TooLarge { limit_mb: 100, .. })
    ));
    assert!(matches!(
        validate(UploadKind::Video, &FileMeta::new("l.png", "image/png", 10)),
        Err(UploadError::UnsupportedType { .. })
    ));
}

#[test]
fn missing_mime_falls_back_to_extension() {
    assert_eq!(validate(UploadKind::Image, &FileMeta::new("photo.JPG", "", 10)), Ok(()));
    assert_eq!(validate(UploadKind::Pdf, &FileMeta::new("ch1.pdf", "", 10)), Ok(()));
    assert!(validate(UploadKind::Pdf, &FileMeta::new("ch1.docx", "", 10)).is_err());
}

#[test]
fn empty_files_are_refused() {
    assert_eq!(
        validate(UploadKind::Pdf, &FileMeta::new("blank.pdf", "application/pdf", 0)),
        Err(UploadError::Empty { name: "blank.pdf".to_owned() })
    );
}
