//! Client-side file gates applied before anything is uploaded.
//!
//! Only type and size are checked. Spreadsheet contents are never parsed;
//! the import endpoint receives the file as-is.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use serde::{Deserialize, Serialize};

const MIB: u64 = 1024 * 1024;

/// Largest accepted image (thumbnails, question and choice graphics).
pub const MAX_IMAGE_BYTES: u64 = 10 * MIB;
/// Largest accepted recorded lecture.
pub const MAX_VIDEO_BYTES: u64 = 100 * MIB;

pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "csv"];
pub const SPREADSHEET_MIME_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/csv",
    "application/vnd.ms-excel",
];

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv"];

/// What a file input is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadKind {
    Image,
    Video,
    Pdf,
    Spreadsheet,
}

impl UploadKind {
    /// Value for the `accept` attribute of a file input.
    #[must_use]
    pub fn accept(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Video => "video/*",
            Self::Pdf => "application/pdf,.pdf",
            Self::Spreadsheet => ".xlsx,.csv",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Pdf => "PDF",
            Self::Spreadsheet => "spreadsheet (.xlsx or .csv)",
        }
    }

    #[must_use]
    pub fn max_bytes(self) -> Option<u64> {
        match self {
            Self::Image => Some(MAX_IMAGE_BYTES),
            Self::Video => Some(MAX_VIDEO_BYTES),
            Self::Pdf | Self::Spreadsheet => None,
        }
    }
}

/// Name, MIME type and size of a picked or dropped file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// Browser-reported MIME type; may be empty.
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), mime: mime.into(), size }
    }

    /// Lowercased extension without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Why a file was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{name} is empty")]
    Empty { name: String },
    #[error("{name} is not a supported {expected} file")]
    UnsupportedType { name: String, expected: &'static str },
    #[error("{name} exceeds the {limit_mb} MB limit for {expected} files")]
    TooLarge { name: String, limit_mb: u64, expected: &'static str },
}

/// Check a file against the rules for `kind`.
///
/// # Errors
///
/// Returns [`UploadError`] naming the file when it is empty, of the wrong
/// type, or over the size limit.
pub fn validate(kind: UploadKind, file: &FileMeta) -> Result<(), UploadError> {
    if file.size == 0 {
        return Err(UploadError::Empty { name: file.name.clone() });
    }
    if !type_allowed(kind, file) {
        return Err(UploadError::UnsupportedType { name: file.name.clone(), expected: kind.label() });
    }
    if let Some(limit) = kind.max_bytes()
        && file.size > limit
    {
        return Err(UploadError::TooLarge { name: file.name.clone(), limit_mb: limit / MIB, expected: kind.label() });
    }
    Ok(())
}

fn type_allowed(kind: UploadKind, file: &FileMeta) -> bool {
    let mime = file.mime.trim().to_ascii_lowercase();
    let ext = file.extension();
    let ext = ext.as_deref();
    match kind {
        UploadKind::Image => mime.starts_with("image/") || (mime.is_empty() && listed(ext, IMAGE_EXTENSIONS)),
        UploadKind::Video => mime.starts_with("video/") || (mime.is_empty() && listed(ext, VIDEO_EXTENSIONS)),
        UploadKind::Pdf => mime == "application/pdf" || (mime.is_empty() && listed(ext, &["pdf"])),
        // Both lists must agree: browsers report CSV under several MIME types.
        UploadKind::Spreadsheet => {
            listed(ext, SPREADSHEET_EXTENSIONS) && (mime.is_empty() || listed(Some(&mime), SPREADSHEET_MIME_TYPES))
        }
    }
}

fn listed(value: Option<&str>, list: &[&str]) -> bool {
    value.is_some_and(|value| list.iter().any(|item| *item == value))
}
