//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A fixed-layout table. Widths are in twips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Number of header rows (0 = no header)
    pub header_rows: u8,

    /// Total table width
    pub total_width: u32,

    /// Column widths, summing to `total_width`
    pub column_widths: Vec<u32>,

    /// Border treatment
    pub borders: BorderStyle,
}

impl Table {
    /// Create an empty table with the given widths.
    ///
    /// Callers normally go through [`crate::layout::TableSpec`], which
    /// checks the widths against the total.
    pub fn new(total_width: u32, column_widths: Vec<u32>, borders: BorderStyle) -> Self {
        Self {
            rows: Vec::new(),
            header_rows: 0,
            total_width,
            column_widths,
            borders,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        if row.is_header {
            self.header_rows = self.header_rows.saturating_add(1);
        }
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        &self.rows[..self.header_rows as usize]
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[TableRow] {
        &self.rows[self.header_rows as usize..]
    }

    /// Whether the column widths add up to the total width.
    pub fn widths_balanced(&self) -> bool {
        self.column_widths.iter().sum::<u32>() == self.total_width
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// How table borders are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// Single black lines around and between all cells
    #[default]
    Single,
    /// Single light grey lines
    Subtle,
    /// No borders, used for layout tables
    None,
}

impl BorderStyle {
    /// Border color as a hex string, or `None` for borderless tables.
    pub fn color(self) -> Option<&'static str> {
        match self {
            BorderStyle::Single => Some("000000"),
            BorderStyle::Subtle => Some("CCCCCC"),
            BorderStyle::None => None,
        }
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,

    /// Minimum row height in twips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
            min_height: None,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
            min_height: None,
        }
    }

    /// Set the minimum height and return self.
    pub fn with_min_height(mut self, height: u32) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub content: Vec<Paragraph>,

    /// Background fill as a hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shading: Option<String>,

    /// Vertical alignment
    pub vertical_alignment: VerticalAlignment,
}

impl TableCell {
    /// Create a cell with multiple paragraphs.
    pub fn with_content(content: Vec<Paragraph>) -> Self {
        Self {
            content,
            shading: None,
            vertical_alignment: VerticalAlignment::Top,
        }
    }

    /// Set the background fill and return self.
    pub fn shaded(mut self, fill: impl Into<String>) -> Self {
        self.shading = Some(fill.into());
        self
    }

    /// Set the vertical alignment and return self.
    pub fn aligned(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Get plain text content, one paragraph per line.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Vertical alignment within a table cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Top alignment (default)
    #[default]
    Top,
    /// Middle alignment
    Center,
    /// Bottom alignment
    Bottom,
}

impl VerticalAlignment {
    /// WordprocessingML `w:vAlign` value.
    pub fn as_wordml(self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParagraphStyle, TextStyle};

    fn cell(text: &str) -> TableCell {
        TableCell::with_content(vec![Paragraph::styled(
            text,
            ParagraphStyle::default(),
            TextStyle::default(),
        )])
    }

    #[test]
    fn test_header_and_body_split() {
        let mut table = Table::new(10200, vec![5100, 5100], BorderStyle::Single);
        table.add_row(TableRow::header(vec![cell("Chỉ tiêu"), cell("Số lượng")]));
        table.add_row(TableRow::new(vec![cell("Tổng số"), cell("3")]));

        assert_eq!(table.header_rows, 1);
        assert_eq!(table.header().len(), 1);
        assert_eq!(table.body().len(), 1);
        assert_eq!(table.column_count(), 2);
        assert!(table.widths_balanced());
        assert_eq!(table.plain_text(), "Chỉ tiêu\tSố lượng\nTổng số\t3");
    }

    #[test]
    fn test_border_colors() {
        assert_eq!(BorderStyle::Single.color(), Some("000000"));
        assert_eq!(BorderStyle::Subtle.color(), Some("CCCCCC"));
        assert_eq!(BorderStyle::None.color(), None);
    }
}
