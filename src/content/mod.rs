//! Content objects supplied by producers.
//!
//! These are plain serde types. The composer only ever borrows them.

mod document;
mod meeting;

pub use document::{Direction, Document, DocumentKind};
pub use meeting::{
    priority_label, AttendanceStatus, Attendee, AttendeeRole, Meeting, MeetingDocument,
    MeetingDocumentKind, MeetingFormat, MeetingKind, MeetingLevel, MeetingStatus, Task,
    TaskStatus, TaskSummary,
};
