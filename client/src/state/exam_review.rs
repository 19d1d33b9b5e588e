//! Review page state: one fetched exam plus local edits.
//!
//! After a successful PUT or DELETE the page splices the change in here
//! first, then refetches. Each operation touches exactly one node and
//! reports whether it found it. Totals are recomputed after every change.

#[cfg(test)]
#[path = "exam_review_test.rs"]
mod exam_review_test;

use std::collections::BTreeSet;

use records::exam::{ChoiceUpdate, QuestionUpdate, SectionUpdate, mark_weight, total_weight};
use records::{Choice, Exam, Question, RecordId, Resource, Section};
use serde_json::Value;

use crate::state::question_draft::BuilderError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExamReviewState {
    pub exam: Option<Exam>,
    pub loading: bool,
    pub error: Option<String>,
    /// Question rows showing their choices.
    pub expanded: BTreeSet<RecordId>,
}

/// What the review page's edit modal is bound to.
#[derive(Clone, Debug, PartialEq)]
pub enum ReviewTarget {
    Section { id: RecordId, name: String, description: String },
    Question { id: RecordId, text: String, marks: String },
    Choice { id: RecordId, text: String, is_correct: bool },
}

/// A validated edit, ready to PUT and splice.
#[derive(Clone, Debug, PartialEq)]
pub enum ReviewUpdate {
    Section(RecordId, SectionUpdate),
    Question(RecordId, QuestionUpdate),
    Choice(RecordId, ChoiceUpdate),
}

impl ReviewUpdate {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Section(id, _) => Resource::Sections.detail(*id),
            Self::Question(id, _) => Resource::Questions.detail(*id),
            Self::Choice(id, _) => Resource::Choices.detail(*id),
        }
    }

    /// JSON request body.
    ///
    /// # Errors
    ///
    /// [`BuilderError::Encode`] if serialization fails.
    pub fn body(&self) -> Result<Value, BuilderError> {
        match self {
            Self::Section(_, update) => serde_json::to_value(update),
            Self::Question(_, update) => serde_json::to_value(update),
            Self::Choice(_, update) => serde_json::to_value(update),
        }
        .map_err(|e| BuilderError::Encode(e.to_string()))
    }
}

impl ReviewTarget {
    #[must_use]
    pub fn section(section: &Section) -> Self {
        Self::Section { id: section.id, name: section.name.clone(), description: section.description.clone() }
    }

    #[must_use]
    pub fn question(question: &Question) -> Self {
        Self::Question { id: question.id, text: question.text.clone(), marks: question.marks.to_string() }
    }

    #[must_use]
    pub fn choice(choice: &Choice) -> Self {
        Self::Choice { id: choice.id, text: choice.text.clone(), is_correct: choice.is_correct }
    }

    /// Detail endpoint of the record this target names.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Section { id, .. } => Resource::Sections.detail(*id),
            Self::Question { id, .. } => Resource::Questions.detail(*id),
            Self::Choice { id, .. } => Resource::Choices.detail(*id),
        }
    }

    /// Text shown in delete confirmations.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Section { name, .. } => name.clone(),
            Self::Question { text, .. } | Self::Choice { text, .. } => text.clone(),
        }
    }

    /// Validate the edited fields.
    ///
    /// # Errors
    ///
    /// Blank name or text, or marks that are not a positive number.
    pub fn to_update(&self) -> Result<ReviewUpdate, BuilderError> {
        match self {
            Self::Section { id, name, description } => {
                if name.trim().is_empty() {
                    return Err(BuilderError::SectionNameRequired);
                }
                Ok(ReviewUpdate::Section(*id, SectionUpdate { name: name.trim().to_owned(), description: description.clone() }))
            }
            Self::Question { id, text, marks } => {
                if text.trim().is_empty() {
                    return Err(BuilderError::QuestionTextRequired);
                }
                let marks = marks
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|m| m.is_finite() && *m > 0.0)
                    .ok_or(BuilderError::InvalidMarks)?;
                Ok(ReviewUpdate::Question(*id, QuestionUpdate { text: text.trim().to_owned(), marks }))
            }
            Self::Choice { id, text, is_correct } => {
                if text.trim().is_empty() {
                    return Err(BuilderError::EmptyChoice);
                }
                Ok(ReviewUpdate::Choice(*id, ChoiceUpdate { text: text.trim().to_owned(), is_correct: *is_correct }))
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        match self {
            Self::Section { id, .. } | Self::Question { id, .. } | Self::Choice { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Section { .. } => "Section",
            Self::Question { .. } => "Question",
            Self::Choice { .. } => "Choice",
        }
    }
}

impl ExamReviewState {
    pub fn toggle(&mut self, question: RecordId) {
        if !self.expanded.remove(&question) {
            self.expanded.insert(question);
        }
    }

    #[must_use]
    pub fn is_expanded(&self, question: RecordId) -> bool {
        self.expanded.contains(&question)
    }

    /// Replace the exam after a (re)fetch.
    pub fn loaded(&mut self, exam: Exam) {
        self.exam = Some(exam);
        self.loading = false;
        self.error = None;
    }

    /// Splice a saved edit into the loaded exam.
    pub fn apply(&mut self, update: &ReviewUpdate) -> bool {
        match update {
            ReviewUpdate::Section(id, update) => self.merge_section(*id, update),
            ReviewUpdate::Question(id, update) => self.merge_question(*id, update),
            ReviewUpdate::Choice(id, update) => self.merge_choice(*id, update),
        }
    }

    /// Drop a deleted node from the loaded exam.
    pub fn remove(&mut self, target: &ReviewTarget) -> bool {
        match target {
            ReviewTarget::Section { id, .. } => self.remove_section(*id),
            ReviewTarget::Question { id, .. } => self.remove_question(*id),
            ReviewTarget::Choice { id, .. } => self.remove_choice(*id),
        }
    }

    pub fn merge_section(&mut self, id: RecordId, update: &SectionUpdate) -> bool {
        let Some(section) = self.exam.as_mut().and_then(|e| e.sections.iter_mut().find(|s| s.id == id)) else {
            return false;
        };
        section.name.clone_from(&update.name);
        section.description.clone_from(&update.description);
        true
    }

    pub fn remove_section(&mut self, id: RecordId) -> bool {
        let Some(exam) = self.exam.as_mut() else {
            return false;
        };
        let before = exam.sections.len();
        exam.sections.retain(|s| s.id != id);
        let removed = exam.sections.len() != before;
        self.recompute();
        removed
    }

    pub fn merge_question(&mut self, id: RecordId, update: &QuestionUpdate) -> bool {
        let found = self.question_mut(id).map(|question| {
            question.text.clone_from(&update.text);
            question.marks = update.marks;
        });
        self.recompute();
        found.is_some()
    }

    pub fn remove_question(&mut self, id: RecordId) -> bool {
        let Some(exam) = self.exam.as_mut() else {
            return false;
        };
        let removed = remove_where(&mut exam.questions, |q| q.id == id)
            || exam.sections.iter_mut().any(|s| remove_where(&mut s.questions, |q| q.id == id));
        self.expanded.remove(&id);
        self.recompute();
        removed
    }

    pub fn merge_choice(&mut self, id: RecordId, update: &ChoiceUpdate) -> bool {
        let Some(choice) = self.choice_mut(id) else {
            return false;
        };
        choice.text.clone_from(&update.text);
        choice.is_correct = update.is_correct;
        true
    }

    pub fn remove_choice(&mut self, id: RecordId) -> bool {
        self.questions_mut()
            .into_iter()
            .any(|q| remove_where(&mut q.choices, |c| c.id == id))
    }

    fn questions_mut(&mut self) -> Vec<&mut Question> {
        match self.exam.as_mut() {
            Some(exam) => exam
                .questions
                .iter_mut()
                .chain(exam.sections.iter_mut().flat_map(|s| s.questions.iter_mut()))
                .collect(),
            None => Vec::new(),
        }
    }

    fn question_mut(&mut self, id: RecordId) -> Option<&mut Question> {
        self.questions_mut().into_iter().find(|q| q.id == id)
    }

    fn choice_mut(&mut self, id: RecordId) -> Option<&mut Choice> {
        self.questions_mut()
            .into_iter()
            .flat_map(|q| q.choices.iter_mut())
            .find(|c| c.id == id)
    }

    fn recompute(&mut self) {
        if let Some(exam) = self.exam.as_mut() {
            let total = total_weight(
                exam.questions
                    .iter()
                    .chain(exam.sections.iter().flat_map(|s| s.questions.iter()))
                    .map(|q| mark_weight(q.marks)),
            );
            exam.total_marks = f64::from(total);
        }
    }
}

fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    match items.iter().position(pred) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}
