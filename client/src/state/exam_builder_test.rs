use super::*;
use crate::state::question_draft::ChoiceDraft;

fn draft(text: &str, marks: &str) -> QuestionDraft {
    QuestionDraft {
        text: text.to_owned(),
        marks: marks.to_owned(),
        choices: vec![
            ChoiceDraft { text: "yes".to_owned(), is_correct: true, graphics: None },
            ChoiceDraft { text: "no".to_owned(), is_correct: false, graphics: None },
        ],
        ..QuestionDraft::default()
    }
}

#[test]
fn adding_and_removing_tracks_total_marks() {
    let mut builder = ExamBuilder::new(ExamType::Grand);
    builder.add_question(&draft("a", "2")).expect("a");
    builder.add_question(&draft("b", "0.5")).expect("b");
    assert_eq!(builder.total_marks, 3);
    let removed = builder.remove_question(0).expect("removed");
    assert_eq!(removed.text, "a");
    assert_eq!(builder.total_marks, 1);
    assert!(builder.remove_question(4).is_none());
}

#[test]
fn invalid_question_changes_nothing() {
    let mut builder = ExamBuilder::new(ExamType::Chapter);
    let mut bad = draft("a", "2");
    bad.choices.truncate(1);
    assert_eq!(builder.add_question(&bad), Err(BuilderError::TooFewChoices));
    assert!(builder.questions.is_empty());
    assert_eq!(builder.total_marks, 0);
}

#[test]
fn submission_requires_title_questions_and_scope() {
    let mut builder = ExamBuilder::new(ExamType::Grand);
    let scope = ExamScope { track: Some(1), subject: Some(4), ..ExamScope::default() };
    assert_eq!(builder.to_submission(&scope), Err(BuilderError::TitleRequired));
    builder.title = "Mock 1".to_owned();
    assert_eq!(builder.to_submission(&scope), Err(BuilderError::NoQuestions));
    builder.add_question(&draft("a", "2")).expect("a");
    assert_eq!(builder.to_submission(&ExamScope::default()), Err(BuilderError::ScopeMissing("subject")));

    let exam = builder.to_submission(&scope).expect("exam");
    assert_eq!(exam.subject, Some(4));
    assert_eq!(exam.track, Some(1));
    assert_eq!(exam.total_marks, 2);
    assert_eq!(exam.exam_type, ExamType::Grand);
}

#[test]
fn chapter_submission_is_scoped_to_chapter() {
    let mut builder = ExamBuilder::new(ExamType::Chapter);
    builder.title = "Quiz".to_owned();
    builder.add_question(&draft("a", "1")).expect("a");
    let scope = ExamScope { subject: Some(2), chapter: Some(8), ..ExamScope::default() };
    let exam = builder.to_submission(&scope).expect("exam");
    assert_eq!(exam.chapter, Some(8));
    assert_eq!(exam.subject, Some(2));
}

#[test]
fn list_paths_filter_by_type_and_scope() {
    let scope = ExamScope { subject: Some(4), chapter: Some(9), university: Some(2), ..ExamScope::default() };
    assert_eq!(scope.list_path(ExamType::Grand).as_deref(), Ok("exams_app/track-exams/?exam_type=grand&subject=4"));
    assert_eq!(scope.list_path(ExamType::Chapter).as_deref(), Ok("exams_app/track-exams/?exam_type=chapter&chapter=9"));
    assert_eq!(scope.list_path(ExamType::University).as_deref(), Ok("exams_app/university-exams/?university=2"));
}

#[test]
fn huge_marks_saturate_the_total() {
    let mut builder = ExamBuilder::new(ExamType::Grand);
    builder.add_question(&draft("a", "3000000000")).expect("a");
    builder.add_question(&draft("b", "3000000000")).expect("b");
    assert_eq!(builder.total_marks, u32::MAX);
    builder.add_question(&draft("c", "2")).expect("c");
    assert_eq!(builder.total_marks, u32::MAX);
    builder.remove_question(0).expect("removed");
    assert_eq!(builder.total_marks, 3_000_000_002);
}
