//! # vanban
//!
//! Layout and rendering engine for Vietnamese administrative documents and
//! meeting records.
//!
//! Loosely structured text (a decision's articles, a meeting's proceedings,
//! lists of attendees and tasks) is classified line by line, styled after
//! the national presentation rules and composed into a render tree, which is
//! then serialized as a WordprocessingML package, JSON or a text preview.
//!
//! ## Quick Start
//!
//! ```
//! use vanban::compose::{compose, Variant};
//! use vanban::content::{Document, DocumentKind};
//! use vanban::render::{self, RenderOptions};
//!
//! fn main() -> vanban::Result<()> {
//!     let doc = Document::new(DocumentKind::OfficialLetter)
//!         .with_issuer("Sở Nội vụ tỉnh Đồng Nai")
//!         .with_recipient("UBND các huyện")
//!         .with_content("Thực hiện chỉ đạo của UBND tỉnh, Sở Nội vụ đề nghị:");
//!
//!     let rendered = compose(Variant::Single(&doc))?;
//!     let xml = render::render_to_string(&rendered, &RenderOptions::default())?;
//!     assert!(xml.contains("Kính gửi: UBND các huyện"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Six layouts**: single document, batch, meeting minutes, conclusion
//!   notice, internal meeting report and a landscape multi-meeting overview
//! - **Line classification**: chapters, articles, clauses and points get
//!   their conventional styles
//! - **Fixed-width tables** checked against the printable page width
//! - **Placeholders** for every missing field; incomplete input never fails
//! - **Output formats**: Flat-OPC WordprocessingML, JSON, plain text

pub mod compose;
pub mod content;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use compose::{ComposeOptions, Composer, Variant, VariantKind};
pub use content::{Document, DocumentKind, Meeting};
pub use error::{Error, Result};
pub use layout::{classify, Role};
pub use model::{Block, Metadata, PageSetup, Paragraph, RenderedDocument, Table};
pub use render::{JsonFormat, OutputFormat, RenderOptions, RenderStats};

use serde::de::DeserializeOwned;

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| Error::InvalidContent(e.to_string()))
}

/// Decode one document from JSON.
///
/// Missing fields take their defaults, so `{}` is a valid (empty) document.
///
/// # Example
///
/// ```
/// let doc = vanban::document_from_json(r#"{"kind": "decision", "number": "15/QĐ-UBND"}"#)?;
/// assert_eq!(doc.kind, vanban::DocumentKind::Decision);
/// # Ok::<(), vanban::Error>(())
/// ```
pub fn document_from_json(json: &str) -> Result<Document> {
    from_json(json)
}

/// Decode a list of documents from a JSON array.
pub fn documents_from_json(json: &str) -> Result<Vec<Document>> {
    from_json(json)
}

/// Decode one meeting from JSON.
pub fn meeting_from_json(json: &str) -> Result<Meeting> {
    from_json(json)
}

/// Decode a list of meetings from a JSON array.
pub fn meetings_from_json(json: &str) -> Result<Vec<Meeting>> {
    from_json(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_json() {
        let doc = document_from_json(
            r#"{"kind": "official_letter", "recipients": ["Sở Tài chính"]}"#,
        )
        .unwrap();
        assert_eq!(doc.kind, DocumentKind::OfficialLetter);
        assert_eq!(doc.recipients, ["Sở Tài chính"]);
    }

    #[test]
    fn test_invalid_json_is_invalid_content() {
        let err = document_from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::InvalidContent(_)));
        assert!(err.to_string().starts_with("invalid content: "));

        let err = documents_from_json(r#"{"kind": "decision"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidContent(_)));
    }

    #[test]
    fn test_meetings_from_json() {
        let meetings = meetings_from_json(
            r#"[{"title": "Họp giao ban", "start": "2024-03-05T08:00:00", "kind": "briefing"}]"#,
        )
        .unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].title, "Họp giao ban");

        let meeting = meeting_from_json(r#"{"title": "Hội nghị"}"#).unwrap();
        assert!(meeting.attendees.is_empty());
    }
}
