use super::*;
use serde_json::json;

#[test]
fn mark_weight_rounds_up_and_ignores_non_positive() {
    assert_eq!(mark_weight(2.0), 2);
    assert_eq!(mark_weight(2.25), 3);
    assert_eq!(mark_weight(0.5), 1);
    assert_eq!(mark_weight(0.0), 0);
    assert_eq!(mark_weight(-3.0), 0);
    assert_eq!(mark_weight(f64::NAN), 0);
}

#[test]
fn section_total_saturates_instead_of_overflowing() {
    let question = Question { id: 1, text: "big".to_owned(), marks: 3e9, graphics: None, choices: Vec::new() };
    let section = Section { id: 1, name: "A".to_owned(), description: String::new(), questions: vec![question.clone(), question] };
    assert_eq!(section.total_marks(), u32::MAX);
    assert_eq!(mark_weight(1e12), u32::MAX);
    assert_eq!(total_weight([u32::MAX - 1, 1, 1]), u32::MAX);
    assert_eq!(total_weight([2, 3]), 5);
}

#[test]
fn exam_type_maps_to_collections() {
    assert_eq!(ExamType::Grand.resource(), Resource::TrackExams);
    assert_eq!(ExamType::Chapter.resource(), Resource::TrackExams);
    assert_eq!(ExamType::University.resource(), Resource::UniversityExams);
    assert!(ExamType::University.has_sections());
    assert!(!ExamType::Grand.has_sections());
    assert_eq!(ExamType::parse(" Grand "), Some(ExamType::Grand));
    assert_eq!(ExamType::parse("final"), None);
}

#[test]
fn university_exam_decodes_nested_sections() {
    let exam: Exam = serde_json::from_value(json!({
        "id": 12,
        "title": "Midterm",
        "exam_type": "university",
        "total_marks": 7,
        "university": 2,
        "sections": [{
            "id": 1,
            "name": "Part A",
            "questions": [{
                "id": 5,
                "text": "2 + 2?",
                "marks": 2.5,
                "choices": [
                    { "id": 8, "text": "4", "is_correct": true, "graphics": null },
                    { "id": 9, "text": "5", "is_correct": false }
                ]
            }]
        }]
    }))
    .expect("exam");
    assert_eq!(exam.exam_type, ExamType::University);
    assert_eq!(exam.question_count(), 1);
    assert_eq!(exam.sections[0].total_marks(), 3);
    assert_eq!(exam.sections[0].questions[0].correct_count(), 1);
}

#[test]
fn new_exam_serializes_without_ids_or_empty_scopes() {
    let exam = NewExam {
        title: "Grand 1".to_owned(),
        description: String::new(),
        exam_type: ExamType::Grand,
        total_marks: 2,
        is_practice_exam: true,
        subject: Some(4),
        questions: vec![NewQuestion {
            text: "Pick one".to_owned(),
            marks: 2.0,
            graphics_field: None,
            choices: vec![
                NewChoice { text: "a".to_owned(), is_correct: true, graphics_field: None },
                NewChoice { text: "b".to_owned(), is_correct: false, graphics_field: None },
            ],
        }],
        ..NewExam::default()
    };
    let value = serde_json::to_value(&exam).expect("json");
    assert_eq!(
        value,
        json!({
            "title": "Grand 1",
            "description": "",
            "exam_type": "grand",
            "total_marks": 2,
            "is_practice_exam": true,
            "subject": 4,
            "questions": [{
                "text": "Pick one",
                "marks": 2.0,
                "choices": [
                    { "text": "a", "is_correct": true },
                    { "text": "b", "is_correct": false }
                ]
            }]
        })
    );
}

#[test]
fn exam_search_covers_type() {
    let exam = Exam { title: "Cardio".to_owned(), exam_type: ExamType::Grand, ..Exam::default() };
    assert!(crate::listing::matches(&exam, "grand"));
    assert!(crate::listing::matches(&exam, "cardio"));
}
