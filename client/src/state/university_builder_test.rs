use super::*;
use crate::net::payload::FormValue;
use crate::state::question_draft::ChoiceDraft;
use records::FileMeta;

fn draft(marks: &str) -> QuestionDraft {
    QuestionDraft {
        text: "Which lobe?".to_owned(),
        marks: marks.to_owned(),
        choices: vec![
            ChoiceDraft { text: "Frontal".to_owned(), is_correct: true, graphics: None },
            ChoiceDraft { text: "Occipital".to_owned(), is_correct: false, graphics: None },
        ],
        ..QuestionDraft::default()
    }
}

fn scope() -> ExamScope {
    ExamScope { track: Some(1), university: Some(6), ..ExamScope::default() }
}

#[test]
fn questions_count_only_after_section_is_added() {
    let mut builder = UniversityExamBuilder::default();
    builder.add_question(&draft("2")).expect("q1");
    builder.add_question(&draft("1.2")).expect("q2");
    assert_eq!(builder.total_marks, 0);
    assert_eq!(builder.section.total_marks(), 4);

    builder.section.name = "Part A".to_owned();
    builder.add_section().expect("section");
    assert_eq!(builder.total_marks, 4);
    assert_eq!(builder.section, SectionDraft::default());
    assert_eq!(builder.sections[0].total_marks, 4);
}

#[test]
fn section_rules() {
    let mut builder = UniversityExamBuilder::default();
    assert_eq!(builder.add_section(), Err(BuilderError::SectionNameRequired));
    builder.section.name = "Part A".to_owned();
    assert_eq!(builder.add_section(), Err(BuilderError::EmptySection));
    assert!(builder.sections.is_empty());
}

#[test]
fn removing_a_section_subtracts_its_marks() {
    let mut builder = UniversityExamBuilder::default();
    for name in ["A", "B"] {
        builder.add_question(&draft("3")).expect("q");
        builder.section.name = name.to_owned();
        builder.add_section().expect("section");
    }
    assert_eq!(builder.total_marks, 6);
    assert_eq!(builder.remove_section(0).map(|s| s.name), Some("A".to_owned()));
    assert_eq!(builder.total_marks, 3);
    assert!(builder.remove_section(3).is_none());
}

#[test]
fn submission_is_multipart_with_payload_and_images() {
    let mut builder = UniversityExamBuilder { title: "Finals".to_owned(), ..UniversityExamBuilder::default() };
    assert_eq!(builder.to_submission(&scope()).err(), Some(BuilderError::NoSections));

    let mut question = draft("2");
    question.graphics = Some(PickedFile::detached(FileMeta::new("x.png", "image/png", 8)));
    builder.add_question(&question).expect("q");
    builder.section.name = "Part A".to_owned();
    builder.add_section().expect("section");

    assert_eq!(
        builder.to_submission(&ExamScope::default()).err(),
        Some(BuilderError::ScopeMissing("university"))
    );

    let (exam, payload) = builder.to_submission(&scope()).expect("submission");
    assert_eq!(exam.university, Some(6));
    assert_eq!(exam.sections[0].questions[0].graphics_field.as_deref(), Some("question_0_0_graphics"));
    let Payload::Multipart(form) = payload else {
        panic!("expected multipart");
    };
    assert_eq!(form.fields[0].0, PAYLOAD_FIELD);
    let FormValue::Value(serde_json::Value::String(json)) = &form.fields[0].1 else {
        panic!("payload should be JSON text");
    };
    assert!(json.contains("\"graphics_field\":\"question_0_0_graphics\""));
    assert!(!json.contains("\"id\""));
    assert_eq!(form.fields[1].0, "question_0_0_graphics");
    assert_eq!(builder.files().len(), 1);
}

#[test]
fn huge_marks_saturate_section_and_exam_totals() {
    let mut builder = UniversityExamBuilder::default();
    builder.add_question(&draft("3000000000")).expect("q1");
    builder.add_question(&draft("3000000000")).expect("q2");
    assert_eq!(builder.section.total_marks(), u32::MAX);
    builder.section.name = "A".to_owned();
    builder.add_section().expect("A");

    builder.add_question(&draft("5")).expect("q3");
    builder.section.name = "B".to_owned();
    builder.add_section().expect("B");
    assert_eq!(builder.total_marks, u32::MAX);
    assert_eq!(builder.sections[1].total_marks, 5);

    builder.remove_section(0).expect("removed");
    assert_eq!(builder.total_marks, 5);
}
