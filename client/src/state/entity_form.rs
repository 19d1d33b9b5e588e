//! Create/edit form state shared by the six entity modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tracks, subjects, chapters, notes, videos and universities all edit the
//! same core fields (name, description, thumbnail) plus at most one parent
//! id taken from session storage and at most one required attachment.
//! [`EntityKind`] captures those differences so one modal serves all six.

#[cfg(test)]
#[path = "entity_form_test.rs"]
mod entity_form_test;

use records::{Chapter, Note, RecordId, Resource, Subject, Track, University, UploadKind, Video};

use crate::net::api::Method;
use crate::net::payload::{FormPayload, Payload};
use crate::util::files::PickedFile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Track,
    Subject,
    Chapter,
    Note,
    Video,
    University,
}

impl EntityKind {
    #[must_use]
    pub fn resource(self) -> Resource {
        match self {
            Self::Track => Resource::Tracks,
            Self::Subject => Resource::Subjects,
            Self::Chapter => Resource::Chapters,
            Self::Note => Resource::Notes,
            Self::Video => Resource::Videos,
            Self::University => Resource::Universities,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.resource().label()
    }

    /// Body field naming the parent record.
    #[must_use]
    pub fn parent_field(self) -> Option<&'static str> {
        self.resource().parent_key()
    }

    /// Required-on-create file field and its upload rules.
    #[must_use]
    pub fn attachment(self) -> Option<(&'static str, UploadKind)> {
        match self {
            Self::Note => Some(("source", UploadKind::Pdf)),
            Self::Video => Some(("video", UploadKind::Video)),
            Self::Track | Self::Subject | Self::Chapter | Self::University => None,
        }
    }

    #[must_use]
    pub fn has_university_flag(self) -> bool {
        matches!(self, Self::Track)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Name is required")]
    NameRequired,
    #[error("A {0} file is required")]
    AttachmentRequired(&'static str),
    #[error("No parent selected for this {0}")]
    ParentMissing(&'static str),
}

/// Editable fields of one entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityDraft {
    /// `None` while creating.
    pub id: Option<RecordId>,
    pub name: String,
    pub description: String,
    pub has_university: bool,
    pub parent: Option<RecordId>,
}

impl EntityDraft {
    #[must_use]
    pub fn create(parent: Option<RecordId>) -> Self {
        Self { parent, ..Self::default() }
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// # Errors
    ///
    /// Returns the first rule the draft breaks.
    pub fn validate(&self, kind: EntityKind, has_attachment: bool) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::NameRequired);
        }
        if kind.parent_field().is_some() && self.parent.is_none() && !self.is_edit() {
            return Err(DraftError::ParentMissing(kind.label()));
        }
        if let Some((_, upload)) = kind.attachment()
            && !self.is_edit()
            && !has_attachment
        {
            return Err(DraftError::AttachmentRequired(upload.label()));
        }
        Ok(())
    }

    /// Request body; multipart when a thumbnail or attachment is set.
    #[must_use]
    pub fn to_payload(&self, kind: EntityKind, thumbnail: Option<PickedFile>, attachment: Option<PickedFile>) -> Payload {
        let mut form = FormPayload::new()
            .value("name", self.name.trim())
            .value("description", self.description.as_str());
        if kind.has_university_flag() {
            form = form.value("has_university", self.has_university);
        }
        if let Some(field) = kind.parent_field() {
            form = form.optional(field, self.parent);
        }
        form = form.file("thumbnail", thumbnail);
        if let Some((field, _)) = kind.attachment() {
            form = form.file(field, attachment);
        }
        Payload::from_form(form)
    }

    /// Verb and path: POST to the collection, or PATCH the record.
    #[must_use]
    pub fn request(&self, kind: EntityKind) -> (Method, String) {
        match self.id {
            Some(id) => (Method::Patch, kind.resource().detail(id)),
            None => (Method::Post, kind.resource().collection().to_owned()),
        }
    }
}

/// A record that one of the entity modals can edit.
pub trait Editable {
    const KIND: EntityKind;

    fn draft(&self) -> EntityDraft;
}

impl Editable for Track {
    const KIND: EntityKind = EntityKind::Track;

    fn draft(&self) -> EntityDraft {
        EntityDraft {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            has_university: self.has_university,
            parent: None,
        }
    }
}

impl Editable for Subject {
    const KIND: EntityKind = EntityKind::Subject;

    fn draft(&self) -> EntityDraft {
        EntityDraft {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            has_university: false,
            parent: self.track,
        }
    }
}

impl Editable for Chapter {
    const KIND: EntityKind = EntityKind::Chapter;

    fn draft(&self) -> EntityDraft {
        EntityDraft {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            has_university: false,
            parent: self.subject,
        }
    }
}

impl Editable for Note {
    const KIND: EntityKind = EntityKind::Note;

    fn draft(&self) -> EntityDraft {
        EntityDraft {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            has_university: false,
            parent: self.chapter,
        }
    }
}

impl Editable for Video {
    const KIND: EntityKind = EntityKind::Video;

    fn draft(&self) -> EntityDraft {
        EntityDraft {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            has_university: false,
            parent: self.chapter,
        }
    }
}

impl Editable for University {
    const KIND: EntityKind = EntityKind::University;

    fn draft(&self) -> EntityDraft {
        EntityDraft {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            has_university: false,
            parent: self.track,
        }
    }
}
