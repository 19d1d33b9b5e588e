//! Sectioned exam builder for university tests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Questions go into the section being composed and only count toward the
//! exam total once that section is added. The submission is multipart: a
//! `payload` field holds the exam JSON and every attached image travels as
//! its own file part, referenced from the JSON by `graphics_field`.

#[cfg(test)]
#[path = "university_builder_test.rs"]
mod university_builder_test;

use records::exam::total_weight;
use records::{ExamType, NewExam, NewSection};

use crate::net::payload::{FormPayload, Payload};
use crate::state::exam_builder::ExamScope;
use crate::state::question_draft::{BuilderError, QuestionDraft, QuestionEntry};
use crate::util::files::PickedFile;

/// Multipart field carrying the exam JSON.
pub const PAYLOAD_FIELD: &str = "payload";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionDraft {
    pub name: String,
    pub description: String,
    pub questions: Vec<QuestionEntry>,
}

impl SectionDraft {
    #[must_use]
    pub fn total_marks(&self) -> u32 {
        total_weight(self.questions.iter().map(QuestionEntry::weight))
    }
}

/// A section accepted into the exam.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionEntry {
    pub name: String,
    pub description: String,
    pub questions: Vec<QuestionEntry>,
    pub total_marks: u32,
}

impl SectionEntry {
    fn files(&self) -> impl Iterator<Item = PickedFile> + '_ {
        self.questions.iter().flat_map(QuestionEntry::files)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniversityExamBuilder {
    pub title: String,
    pub description: String,
    pub is_practice_exam: bool,
    pub sections: Vec<SectionEntry>,
    pub section: SectionDraft,
    pub total_marks: u32,
}

impl UniversityExamBuilder {
    /// Validate `draft` into the in-progress section.
    ///
    /// # Errors
    ///
    /// Returns the draft's first validation failure; nothing changes.
    pub fn add_question(&mut self, draft: &QuestionDraft) -> Result<(), BuilderError> {
        let entry = draft.finalize()?;
        self.section.questions.push(entry);
        Ok(())
    }

    pub fn remove_section_question(&mut self, index: usize) -> Option<QuestionEntry> {
        (index < self.section.questions.len()).then(|| self.section.questions.remove(index))
    }

    /// Accept the in-progress section and fold its marks into the total.
    ///
    /// # Errors
    ///
    /// Blank name or no questions; nothing changes.
    pub fn add_section(&mut self) -> Result<(), BuilderError> {
        if self.section.name.trim().is_empty() {
            return Err(BuilderError::SectionNameRequired);
        }
        if self.section.questions.is_empty() {
            return Err(BuilderError::EmptySection);
        }
        let draft = std::mem::take(&mut self.section);
        let total_marks = draft.total_marks();
        self.total_marks = self.total_marks.saturating_add(total_marks);
        self.sections.push(SectionEntry {
            name: draft.name.trim().to_owned(),
            description: draft.description,
            questions: draft.questions,
            total_marks,
        });
        Ok(())
    }

    pub fn remove_section(&mut self, index: usize) -> Option<SectionEntry> {
        if index >= self.sections.len() {
            return None;
        }
        let section = self.sections.remove(index);
        self.total_marks = total_weight(self.sections.iter().map(|s| s.total_marks));
        Some(section)
    }

    /// Every attached image, accepted or in progress.
    #[must_use]
    pub fn files(&self) -> Vec<PickedFile> {
        self.sections
            .iter()
            .flat_map(SectionEntry::files)
            .chain(self.section.questions.iter().flat_map(QuestionEntry::files))
            .collect()
    }

    /// Build the exam and its multipart request.
    ///
    /// # Errors
    ///
    /// Missing title, no sections, no university selected, or a JSON
    /// encoding failure.
    pub fn to_submission(&self, scope: &ExamScope) -> Result<(NewExam, Payload), BuilderError> {
        if self.title.trim().is_empty() {
            return Err(BuilderError::TitleRequired);
        }
        if self.sections.is_empty() {
            return Err(BuilderError::NoSections);
        }
        let (_, university) = scope.require(ExamType::University)?;

        let mut files = Vec::new();
        let sections = self
            .sections
            .iter()
            .enumerate()
            .map(|(s, section)| NewSection {
                name: section.name.clone(),
                description: section.description.clone(),
                questions: section
                    .questions
                    .iter()
                    .enumerate()
                    .map(|(q, question)| {
                        let (new, mut parts) = question.to_new_with_files(s, q);
                        files.append(&mut parts);
                        new
                    })
                    .collect(),
            })
            .collect();

        let exam = NewExam {
            title: self.title.trim().to_owned(),
            description: self.description.clone(),
            exam_type: ExamType::University,
            total_marks: self.total_marks,
            is_practice_exam: self.is_practice_exam,
            track: scope.track,
            university: Some(university),
            sections,
            ..NewExam::default()
        };
        let json = serde_json::to_string(&exam).map_err(|e| BuilderError::Encode(e.to_string()))?;
        let form = files
            .into_iter()
            .fold(FormPayload::new().value(PAYLOAD_FIELD, json), |form, (field, file)| form.file(field, Some(file)));
        Ok((exam, Payload::Multipart(form)))
    }
}
