//! Shared record model for the LMS admin dashboard.
//!
//! This crate owns the REST representation used by both `client` and `cli`:
//! catalog entities, exams, endpoint paths, and the small amount of pure
//! logic both front ends apply to them (search/sort/paging, upload rules,
//! response decoding).
//!
//! DESIGN
//! ======
//! Nothing here performs I/O. The backend owns every identifier and every
//! invariant; these types only mirror its JSON and gate what the forms send.

pub mod endpoints;
pub mod entities;
pub mod envelope;
pub mod exam;
pub mod listing;
pub mod upload;

pub use endpoints::Resource;
pub use entities::{Chapter, Note, RecordId, Subject, Track, University, Video};
pub use envelope::{ListEnvelope, decode_list, error_message, extract_token};
pub use exam::{Choice, Exam, ExamType, NewChoice, NewExam, NewQuestion, NewSection, Question, Section};
pub use listing::{ListQuery, Listed, PAGE_SIZE, Page};
pub use upload::{FileMeta, UploadError, UploadKind};
