use super::*;
use serde_json::json;

fn import_args(exam_type: ExamType) -> ImportArgs {
    ImportArgs { exam_type, file: PathBuf::from("quiz.xlsx"), ..ImportArgs::default() }
}

#[test]
fn cli_parses_list_with_filters() {
    let cli = Cli::try_parse_from([
        "lms-admin",
        "--token",
        "abc",
        "list",
        "track-exams",
        "--exam-type",
        "grand",
        "--parent",
        "4",
        "--search",
        "cardio",
    ])
    .expect("parse");
    let Command::List(args) = cli.command else {
        panic!("expected list");
    };
    assert_eq!(args.resource, Resource::TrackExams);
    assert_eq!(list_path(&args), "exams_app/track-exams/?exam_type=grand&subject=4");
    assert_eq!(args.page, 1);
}

#[test]
fn unknown_resource_is_rejected() {
    let err = Cli::try_parse_from(["lms-admin", "list", "boards"]).unwrap_err();
    assert!(err.to_string().contains("unknown resource `boards`"));
}

#[test]
fn list_path_uses_parent_key() {
    let cli = Cli::try_parse_from(["lms-admin", "list", "chapters", "--parent", "9"]).expect("parse");
    let Command::List(args) = cli.command else {
        panic!("expected list");
    };
    assert_eq!(list_path(&args), "tracks_app/chapters/?subject=9");
}

#[test]
fn bearer_prefix_is_added_once() {
    assert_eq!(bearer_value("abc"), "Bearer abc");
    assert_eq!(bearer_value(" Bearer abc "), "Bearer abc");
}

#[test]
fn missing_token_is_reported_before_any_request() {
    let ctx = CliContext { base_url: "http://127.0.0.1:1".to_owned(), token: Some("  ".to_owned()) };
    assert!(matches!(authorized_client(&ctx), Err(CliError::MissingToken)));
}

#[test]
fn chapter_import_sends_subject_and_chapter() {
    let args = ImportArgs { track: Some(1), subject: Some(2), chapter: Some(3), ..import_args(ExamType::Chapter) };
    let fields = import_fields(&args).expect("fields");
    assert_eq!(
        fields,
        vec![
            ("exam_type", "chapter".to_owned()),
            ("track", "1".to_owned()),
            ("subject", "2".to_owned()),
            ("chapter", "3".to_owned()),
        ]
    );
}

#[test]
fn grand_import_requires_subject() {
    let err = import_fields(&import_args(ExamType::Grand)).unwrap_err();
    assert_eq!(err.to_string(), "--subject is required for this exam type");
}

#[test]
fn spreadsheet_mime_follows_extension() {
    let meta = file_meta(Path::new("/tmp/Exam.CSV"), 10);
    assert_eq!(meta.name, "Exam.CSV");
    assert_eq!(meta.mime, "text/csv");
    assert!(records::upload::validate(UploadKind::Spreadsheet, &meta).is_ok());

    let meta = file_meta(Path::new("notes.pdf"), 10);
    assert!(records::upload::validate(UploadKind::Spreadsheet, &meta).is_err());
}

#[test]
fn page_render_filters_and_counts() {
    let body = json!({ "results": [
        { "id": 1, "name": "Nursing" },
        { "id": 2, "name": "Pharmacy" },
        { "id": 3, "name": "Nursing II" }
    ]});
    let query = ListQuery { search: "nursing".to_owned(), page: 1 };
    let out = render_page::<Track>(body, &query).expect("render");
    assert!(out.contains("1\tNursing\n"));
    assert!(out.contains("3\tNursing II\n"));
    assert!(!out.contains("Pharmacy"));
    assert!(out.ends_with("page 1 of 1 (2 matching)\n"));
}

#[test]
fn exam_outline_lists_sections_and_correct_choices() {
    let exam: Exam = serde_json::from_value(json!({
        "id": 5,
        "title": "Midterm",
        "exam_type": "university",
        "total_marks": 2,
        "is_practice_exam": true,
        "sections": [{
            "id": 1,
            "name": "Part A",
            "questions": [{
                "id": 7,
                "text": "2 + 2?",
                "marks": 2,
                "choices": [{ "id": 1, "text": "4", "is_correct": true }, { "id": 2, "text": "5" }]
            }]
        }]
    }))
    .expect("exam");
    let out = render_exam(&exam);
    assert!(out.starts_with("Midterm [university] (practice)\n"));
    assert!(out.contains("## Part A (2 marks)"));
    assert!(out.contains("   [x] 4\n"));
    assert!(out.contains("   [ ] 5\n"));
}
