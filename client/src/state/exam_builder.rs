//! Flat exam builder for grand and chapter tests.
//!
//! DESIGN
//! ======
//! Questions are validated when added, so the builder only ever holds
//! complete questions and `total_marks` is always the sum of their weights.
//! The submission carries no ids; the backend assigns them.

#[cfg(test)]
#[path = "exam_builder_test.rs"]
mod exam_builder_test;

use records::endpoints::with_query;
use records::exam::total_weight;
use records::{ExamType, NewExam, RecordId, Resource};

use crate::state::question_draft::{BuilderError, QuestionDraft, QuestionEntry};
use crate::util::session::{self, keys};

/// Parent ids an exam hangs off, read from the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExamScope {
    pub track: Option<RecordId>,
    pub subject: Option<RecordId>,
    pub chapter: Option<RecordId>,
    pub university: Option<RecordId>,
}

impl ExamScope {
    #[must_use]
    pub fn from_session() -> Self {
        let id = |key: &'static str| session::parse_id(key, session::get(key)).ok();
        Self {
            track: id(keys::ID_TRACK),
            subject: id(keys::ID_SUBJECT),
            chapter: id(keys::CHAPTER_ID),
            university: id(keys::ID_UNIVERSITY),
        }
    }

    /// The id that scopes `exam_type`, with the query key it is sent under.
    ///
    /// # Errors
    ///
    /// [`BuilderError::ScopeMissing`] when that id is not selected.
    pub fn require(&self, exam_type: ExamType) -> Result<(&'static str, RecordId), BuilderError> {
        let (key, id) = match exam_type {
            ExamType::Grand => ("subject", self.subject),
            ExamType::Chapter => ("chapter", self.chapter),
            ExamType::University => ("university", self.university),
        };
        id.map(|id| (key, id)).ok_or(BuilderError::ScopeMissing(key))
    }

    /// Exam list path for `exam_type` under this scope.
    ///
    /// # Errors
    ///
    /// [`BuilderError::ScopeMissing`] when the scoping id is not selected.
    pub fn list_path(&self, exam_type: ExamType) -> Result<String, BuilderError> {
        let (key, id) = self.require(exam_type)?;
        Ok(match exam_type {
            ExamType::University => Resource::UniversityExams.list(Some(id)),
            ExamType::Grand | ExamType::Chapter => with_query(
                Resource::TrackExams.collection(),
                &[("exam_type", exam_type.as_str().to_owned()), (key, id.to_string())],
            ),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExamBuilder {
    pub exam_type: ExamType,
    pub title: String,
    pub description: String,
    pub is_practice_exam: bool,
    pub questions: Vec<QuestionEntry>,
    pub total_marks: u32,
}

impl ExamBuilder {
    #[must_use]
    pub fn new(exam_type: ExamType) -> Self {
        Self { exam_type, ..Self::default() }
    }

    /// Validate `draft` and append it. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the draft's first validation failure.
    pub fn add_question(&mut self, draft: &QuestionDraft) -> Result<(), BuilderError> {
        let entry = draft.finalize()?;
        self.total_marks = self.total_marks.saturating_add(entry.weight());
        self.questions.push(entry);
        Ok(())
    }

    pub fn remove_question(&mut self, index: usize) -> Option<QuestionEntry> {
        if index >= self.questions.len() {
            return None;
        }
        let entry = self.questions.remove(index);
        self.total_marks = total_weight(self.questions.iter().map(QuestionEntry::weight));
        Some(entry)
    }

    /// Build the bulk submission.
    ///
    /// # Errors
    ///
    /// Missing title, no questions, or a missing scope id.
    pub fn to_submission(&self, scope: &ExamScope) -> Result<NewExam, BuilderError> {
        if self.title.trim().is_empty() {
            return Err(BuilderError::TitleRequired);
        }
        if self.questions.is_empty() {
            return Err(BuilderError::NoQuestions);
        }
        let (key, id) = scope.require(self.exam_type)?;
        let mut exam = NewExam {
            title: self.title.trim().to_owned(),
            description: self.description.clone(),
            exam_type: self.exam_type,
            total_marks: self.total_marks,
            is_practice_exam: self.is_practice_exam,
            track: scope.track,
            questions: self.questions.iter().map(QuestionEntry::to_new).collect(),
            ..NewExam::default()
        };
        match key {
            "subject" => exam.subject = Some(id),
            "chapter" => {
                exam.chapter = Some(id);
                exam.subject = scope.subject;
            }
            _ => exam.university = Some(id),
        }
        Ok(exam)
    }
}
