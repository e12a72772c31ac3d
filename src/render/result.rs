//! Rendering result with metadata and statistics.

use crate::model::{Block, Metadata, Paragraph, RenderedDocument};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The serialized content (WordprocessingML, JSON or text)
    pub content: String,

    /// Document metadata (copied from the render tree)
    pub metadata: Metadata,

    /// Structure statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: RenderStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }
}

/// Structure counts of a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Top-level paragraphs
    pub paragraph_count: u32,

    /// Tables
    pub table_count: u32,

    /// Rows across all tables
    pub table_row_count: u32,

    /// Page breaks
    pub page_break_count: u32,

    /// Character count (excluding whitespace), tables included
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the blocks of a rendered document.
    pub fn of(doc: &RenderedDocument) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            match block {
                Block::Paragraph(p) => {
                    stats.add_paragraph();
                    stats.count_paragraph(p);
                }
                Block::Table(t) => {
                    stats.add_table(t.row_count());
                    for cell in t.rows.iter().flat_map(|r| &r.cells) {
                        cell.content.iter().for_each(|p| stats.count_paragraph(p));
                    }
                }
                Block::PageBreak => stats.add_page_break(),
            }
        }
        stats
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment table count and add its rows.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.table_row_count += rows as u32;
    }

    /// Increment page break count.
    pub fn add_page_break(&mut self) {
        self.page_break_count += 1;
    }

    /// Add character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    fn count_paragraph(&mut self, p: &Paragraph) {
        for run in p.runs() {
            self.count_text(&run.text);
        }
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.paragraph_count += other.paragraph_count;
        self.table_count += other.table_count;
        self.table_row_count += other.table_row_count;
        self.page_break_count += other.page_break_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BorderStyle, ParagraphStyle, Table, TableCell, TableRow, TextStyle};

    fn para(text: &str) -> Paragraph {
        Paragraph::styled(text, ParagraphStyle::default(), TextStyle::default())
    }

    #[test]
    fn test_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Điều 1. Phạm vi");
        // "Điều1.Phạmvi"
        assert_eq!(stats.char_count, 12);
    }

    #[test]
    fn test_stats_of_document() {
        let mut doc = RenderedDocument::default();
        doc.add_block(para("Kính gửi"));
        doc.add_block(Block::PageBreak);
        let mut table = Table::new(10200, vec![5100, 5100], BorderStyle::Single);
        table.add_row(TableRow::header(vec![
            TableCell::with_content(vec![para("A")]),
            TableCell::with_content(vec![para("B")]),
        ]));
        table.add_row(TableRow::new(vec![
            TableCell::with_content(vec![para("1")]),
            TableCell::with_content(vec![]),
        ]));
        doc.add_block(table);

        let stats = RenderStats::of(&doc);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 2);
        assert_eq!(stats.page_break_count, 1);
        assert_eq!(stats.char_count, 7 + 3);
    }

    #[test]
    fn test_merge() {
        let mut a = RenderStats {
            paragraph_count: 2,
            page_break_count: 1,
            ..Default::default()
        };
        let b = RenderStats {
            paragraph_count: 3,
            table_count: 1,
            table_row_count: 4,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.paragraph_count, 5);
        assert_eq!(a.table_count, 1);
        assert_eq!(a.table_row_count, 4);
        assert_eq!(a.page_break_count, 1);
    }
}
