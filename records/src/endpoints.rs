//! Backend REST paths.
//!
//! Paths are relative to the API base URL and keep the backend's trailing
//! slash convention. List filters are plain `key=value` query pairs; every
//! value this dashboard sends is an id or an exam type, so no escaping is
//! applied.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::entities::RecordId;

/// Token exchange for the login screen.
pub const LOGIN_PATH: &str = "accounts_app/login/";

/// REST collections the dashboard talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Tracks,
    Subjects,
    Chapters,
    Universities,
    Notes,
    Videos,
    TrackExams,
    UniversityExams,
    Sections,
    Questions,
    Choices,
}

impl Resource {
    pub const ALL: [Self; 11] = [
        Self::Tracks,
        Self::Subjects,
        Self::Chapters,
        Self::Universities,
        Self::Notes,
        Self::Videos,
        Self::TrackExams,
        Self::UniversityExams,
        Self::Sections,
        Self::Questions,
        Self::Choices,
    ];

    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Tracks => "tracks_app/tracks/",
            Self::Subjects => "tracks_app/subjects/",
            Self::Chapters => "tracks_app/chapters/",
            Self::Universities => "tracks_app/universities/",
            Self::Notes => "contents_app/notes/",
            Self::Videos => "contents_app/videos/",
            Self::TrackExams => "exams_app/track-exams/",
            Self::UniversityExams => "exams_app/university-exams/",
            Self::Sections => "exams_app/sections/",
            Self::Questions => "exams_app/questions/",
            Self::Choices => "exams_app/choices/",
        }
    }

    #[must_use]
    pub fn detail(self, id: RecordId) -> String {
        format!("{}{id}/", self.collection())
    }

    /// Spreadsheet import endpoint; only exam collections accept imports.
    #[must_use]
    pub fn import(self) -> Option<String> {
        match self {
            Self::TrackExams | Self::UniversityExams => Some(format!("{}import/", self.collection())),
            _ => None,
        }
    }

    /// Query key that scopes a list to its parent record.
    #[must_use]
    pub fn parent_key(self) -> Option<&'static str> {
        match self {
            Self::Subjects | Self::Universities => Some("track"),
            Self::Chapters => Some("subject"),
            Self::Notes | Self::Videos => Some("chapter"),
            Self::UniversityExams => Some("university"),
            Self::Tracks | Self::TrackExams | Self::Sections | Self::Questions | Self::Choices => None,
        }
    }

    /// Singular, human-readable name used in toasts and dialog titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tracks => "Track",
            Self::Subjects => "Subject",
            Self::Chapters => "Chapter",
            Self::Universities => "University",
            Self::Notes => "Note",
            Self::Videos => "Video",
            Self::TrackExams | Self::UniversityExams => "Exam",
            Self::Sections => "Section",
            Self::Questions => "Question",
            Self::Choices => "Choice",
        }
    }

    /// Command-line name (`tracks`, `track-exams`, ...).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Tracks => "tracks",
            Self::Subjects => "subjects",
            Self::Chapters => "chapters",
            Self::Universities => "universities",
            Self::Notes => "notes",
            Self::Videos => "videos",
            Self::TrackExams => "track-exams",
            Self::UniversityExams => "university-exams",
            Self::Sections => "sections",
            Self::Questions => "questions",
            Self::Choices => "choices",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }

    /// Collection path scoped to `parent` when the resource has a parent key.
    #[must_use]
    pub fn list(self, parent: Option<RecordId>) -> String {
        match (self.parent_key(), parent) {
            (Some(key), Some(id)) => with_query(self.collection(), &[(key, id.to_string())]),
            _ => self.collection().to_owned(),
        }
    }
}

/// Append `key=value` pairs to `path`.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}{query}")
}

/// Join the API base URL and a relative path with exactly one slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
