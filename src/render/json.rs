//! JSON rendering for composed documents.

use crate::error::{Error, Result};
use crate::model::RenderedDocument;
use serde::{Deserialize, Serialize};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a rendered document to JSON.
pub fn to_json(doc: &RenderedDocument, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, PageSetup, Paragraph, ParagraphStyle, TextStyle};

    fn sample() -> RenderedDocument {
        let mut doc = RenderedDocument::new(PageSetup::landscape());
        doc.metadata.title = Some("Bảng tổng hợp".to_string());
        doc.add_block(Paragraph::styled(
            "BẢNG TỔNG HỢP",
            ParagraphStyle::default(),
            TextStyle::default(),
        ));
        doc.add_block(Block::PageBreak);
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"orientation\": \"landscape\""));
        assert!(json.contains("\"type\": \"page_break\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_json_reads_back() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        let back: RenderedDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
