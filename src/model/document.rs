//! Document-level types.

use super::{Block, PageSetup, Paragraph, Table};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A composed document, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Page geometry shared by the whole document
    pub page: PageSetup,

    /// Content blocks in reading order
    pub blocks: Vec<Block>,
}

impl RenderedDocument {
    /// Create a new empty document with the given page setup.
    pub fn new(page: PageSetup) -> Self {
        Self {
            metadata: Metadata::default(),
            page,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: impl Into<Block>) {
        self.blocks.push(block.into());
    }

    /// Append a sequence of blocks.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.blocks.extend(blocks);
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Top-level paragraphs in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Top-level tables in order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Number of page breaks.
    pub fn page_break_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_page_break()).count()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for RenderedDocument {
    fn default() -> Self {
        Self::new(PageSetup::default())
    }
}

/// Document metadata written to the package properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Vec<String>,

    /// Creator application
    pub creator: Option<String>,

    /// Creation date, only set when the caller supplies an export stamp
    pub created: Option<NaiveDateTime>,
}

impl Metadata {
    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_empty()
            && self.creator.is_none()
            && self.created.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderStyle, ParagraphStyle, TextStyle};

    #[test]
    fn test_block_accessors() {
        let mut doc = RenderedDocument::default();
        doc.add_block(Paragraph::styled(
            "Điều 1",
            ParagraphStyle::default(),
            TextStyle::default(),
        ));
        doc.add_block(Block::PageBreak);
        doc.add_block(Table::new(10200, vec![10200], BorderStyle::None));

        assert_eq!(doc.paragraphs().count(), 1);
        assert_eq!(doc.tables().count(), 1);
        assert_eq!(doc.page_break_count(), 1);
        assert_eq!(doc.plain_text(), "Điều 1\n");
    }

    #[test]
    fn test_metadata_empty() {
        assert!(Metadata::default().is_empty());
        let meta = Metadata {
            title: Some("Biên bản".into()),
            ..Default::default()
        };
        assert!(!meta.is_empty());
    }
}
