//! Exams as read from and submitted to the backend.
//!
//! Chapter and grand tests ("track exams") carry a flat question list;
//! university tests group questions into sections. The `New*` types are the
//! submission shapes built by the exam builders. They carry no ids: the
//! backend assigns every identifier.

#[cfg(test)]
#[path = "exam_test.rs"]
mod exam_test;

use serde::{Deserialize, Serialize};

use crate::endpoints::Resource;
use crate::entities::{RecordId, null_as_default};
use crate::listing::Listed;

/// Which scope an exam belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    #[default]
    Chapter,
    Grand,
    University,
}

impl ExamType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Grand => "grand",
            Self::University => "university",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chapter => "Chapter test",
            Self::Grand => "Grand test",
            Self::University => "University test",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "chapter" => Some(Self::Chapter),
            "grand" => Some(Self::Grand),
            "university" => Some(Self::University),
            _ => None,
        }
    }

    /// Collection that stores this exam type.
    #[must_use]
    pub fn resource(self) -> Resource {
        match self {
            Self::Chapter | Self::Grand => Resource::TrackExams,
            Self::University => Resource::UniversityExams,
        }
    }

    #[must_use]
    pub fn has_sections(self) -> bool {
        matches!(self, Self::University)
    }
}

/// Marks contributed to an exam total: fractional marks round up.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mark_weight(marks: f64) -> u32 {
    if marks.is_finite() && marks > 0.0 {
        marks.ceil().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Sum mark weights, stopping at `u32::MAX` instead of overflowing.
#[must_use]
pub fn total_weight(weights: impl IntoIterator<Item = u32>) -> u32 {
    weights.into_iter().fold(0, u32::saturating_add)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_correct: bool,
    pub graphics: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Question {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub marks: f64,
    pub graphics: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
}

impl Question {
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_correct).count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
}

impl Section {
    #[must_use]
    pub fn total_marks(&self) -> u32 {
        total_weight(self.questions.iter().map(|q| mark_weight(q.marks)))
    }
}

/// Any exam variant. Track exams fill `questions`, university exams fill
/// `sections`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exam {
    pub id: RecordId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub exam_type: ExamType,
    pub thumbnail: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_marks: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_practice_exam: bool,
    pub track: Option<RecordId>,
    pub subject: Option<RecordId>,
    pub chapter: Option<RecordId>,
    pub university: Option<RecordId>,
    #[serde(deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
    #[serde(deserialize_with = "null_as_default")]
    pub sections: Vec<Section>,
    pub created_on: Option<String>,
    pub modified_on: Option<String>,
}

impl Exam {
    /// Number of questions across the flat list and every section.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len() + self.sections.iter().map(|s| s.questions.len()).sum::<usize>()
    }
}

impl Listed for Exam {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.exam_type.as_str()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewChoice {
    pub text: String,
    pub is_correct: bool,
    /// Multipart field holding this choice's image, when one is attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphics_field: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewQuestion {
    pub text: String,
    pub marks: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphics_field: Option<String>,
    pub choices: Vec<NewChoice>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewSection {
    pub name: String,
    pub description: String,
    pub questions: Vec<NewQuestion>,
}

/// Bulk exam submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewExam {
    pub title: String,
    pub description: String,
    pub exam_type: ExamType,
    pub total_marks: u32,
    pub is_practice_exam: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<RecordId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<NewQuestion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<NewSection>,
}

/// `PUT exams_app/sections/{id}/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionUpdate {
    pub name: String,
    pub description: String,
}

/// `PUT exams_app/questions/{id}/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionUpdate {
    pub text: String,
    pub marks: f64,
}

/// `PUT exams_app/choices/{id}/` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChoiceUpdate {
    pub text: String,
    pub is_correct: bool,
}
