//! In-progress question and choice editing shared by both exam builders.

#[cfg(test)]
#[path = "question_draft_test.rs"]
mod question_draft_test;

use records::exam::mark_weight;
use records::{NewChoice, NewQuestion};

use crate::util::files::PickedFile;

/// Validation failures surfaced as toasts by the builders.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    #[error("Option text is required")]
    EmptyChoice,
    #[error("Question text is required")]
    QuestionTextRequired,
    #[error("Add at least 2 options")]
    TooFewChoices,
    #[error("Mark at least 1 option as correct")]
    NoCorrectChoice,
    #[error("Marks must be a positive number")]
    InvalidMarks,
    #[error("Section name is required")]
    SectionNameRequired,
    #[error("Add at least 1 question to the section")]
    EmptySection,
    #[error("Exam title is required")]
    TitleRequired,
    #[error("Add at least 1 question to the exam")]
    NoQuestions,
    #[error("Add at least 1 section to the exam")]
    NoSections,
    #[error("No {0} selected. Go back and choose one first.")]
    ScopeMissing(&'static str),
    #[error("Could not encode exam: {0}")]
    Encode(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceDraft {
    pub text: String,
    pub is_correct: bool,
    pub graphics: Option<PickedFile>,
}

impl ChoiceDraft {
    fn to_new(&self, graphics_field: Option<String>) -> NewChoice {
        NewChoice { text: self.text.trim().to_owned(), is_correct: self.is_correct, graphics_field }
    }
}

/// The question being composed, plus the choice being typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    /// Raw input; parsed on add.
    pub marks: String,
    pub graphics: Option<PickedFile>,
    pub choices: Vec<ChoiceDraft>,
    pub choice_input: ChoiceDraft,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            text: String::new(),
            marks: "1".to_owned(),
            graphics: None,
            choices: Vec::new(),
            choice_input: ChoiceDraft::default(),
        }
    }
}

impl QuestionDraft {
    /// Move the choice input into the choice list.
    ///
    /// # Errors
    ///
    /// [`BuilderError::EmptyChoice`] when the input is blank; nothing changes.
    pub fn add_choice(&mut self) -> Result<(), BuilderError> {
        if self.choice_input.text.trim().is_empty() {
            return Err(BuilderError::EmptyChoice);
        }
        let choice = std::mem::take(&mut self.choice_input);
        self.choices.push(choice);
        Ok(())
    }

    /// Remove a choice, returning it so its image can be released.
    pub fn remove_choice(&mut self, index: usize) -> Option<ChoiceDraft> {
        (index < self.choices.len()).then(|| self.choices.remove(index))
    }

    pub fn toggle_correct(&mut self, index: usize) {
        if let Some(choice) = self.choices.get_mut(index) {
            choice.is_correct = !choice.is_correct;
        }
    }

    /// Parsed marks, if positive and finite.
    #[must_use]
    pub fn parsed_marks(&self) -> Option<f64> {
        self.marks.trim().parse::<f64>().ok().filter(|m| m.is_finite() && *m > 0.0)
    }

    /// Validate and produce the finished question. Checks run in a fixed
    /// order and stop at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuilderError`] the draft breaks.
    pub fn finalize(&self) -> Result<QuestionEntry, BuilderError> {
        if self.text.trim().is_empty() {
            return Err(BuilderError::QuestionTextRequired);
        }
        if self.choices.len() < 2 {
            return Err(BuilderError::TooFewChoices);
        }
        if !self.choices.iter().any(|c| c.is_correct) {
            return Err(BuilderError::NoCorrectChoice);
        }
        let marks = self.parsed_marks().ok_or(BuilderError::InvalidMarks)?;
        Ok(QuestionEntry {
            text: self.text.trim().to_owned(),
            marks,
            graphics: self.graphics.clone(),
            choices: self.choices.clone(),
        })
    }

    /// Every image attached anywhere in the draft.
    #[must_use]
    pub fn files(&self) -> Vec<PickedFile> {
        self.graphics
            .iter()
            .chain(self.choices.iter().filter_map(|c| c.graphics.as_ref()))
            .chain(self.choice_input.graphics.iter())
            .cloned()
            .collect()
    }
}

/// A validated question waiting in a builder.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionEntry {
    pub text: String,
    pub marks: f64,
    pub graphics: Option<PickedFile>,
    pub choices: Vec<ChoiceDraft>,
}

impl QuestionEntry {
    /// Contribution to the exam total.
    #[must_use]
    pub fn weight(&self) -> u32 {
        mark_weight(self.marks)
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_correct).count()
    }

    /// Submission shape without image references.
    #[must_use]
    pub fn to_new(&self) -> NewQuestion {
        NewQuestion {
            text: self.text.clone(),
            marks: self.marks,
            graphics_field: None,
            choices: self.choices.iter().map(|c| c.to_new(None)).collect(),
        }
    }

    /// Submission shape naming multipart image fields for question `q` of
    /// section `s`. Returns the question and the `(field, file)` pairs.
    #[must_use]
    pub fn to_new_with_files(&self, s: usize, q: usize) -> (NewQuestion, Vec<(String, PickedFile)>) {
        let mut files = Vec::new();
        let graphics_field = self.graphics.as_ref().map(|file| {
            let field = format!("question_{s}_{q}_graphics");
            files.push((field.clone(), file.clone()));
            field
        });
        let choices = self
            .choices
            .iter()
            .enumerate()
            .map(|(c, choice)| {
                let field = choice.graphics.as_ref().map(|file| {
                    let field = format!("choice_{s}_{q}_{c}_graphics");
                    files.push((field.clone(), file.clone()));
                    field
                });
                choice.to_new(field)
            })
            .collect();
        (NewQuestion { text: self.text.clone(), marks: self.marks, graphics_field, choices }, files)
    }

    #[must_use]
    pub fn files(&self) -> Vec<PickedFile> {
        self.graphics
            .iter()
            .chain(self.choices.iter().filter_map(|c| c.graphics.as_ref()))
            .cloned()
            .collect()
    }
}
