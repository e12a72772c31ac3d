//! Fixed-width table construction.
//!
//! Every table the composer emits goes through a [`TableSpec`], which
//! refuses column widths that do not add up to the total width. The width
//! sets below are also checked at compile time.

use super::style::{style_of, Element, StyleDirectives};
use super::{LANDSCAPE_WIDTH, PORTRAIT_WIDTH};
use crate::error::{Error, Result};
use crate::model::{Alignment, BorderStyle, Paragraph, Table, TableCell, TableRow, VerticalAlignment};

/// Fill of header cells.
pub const HEADER_FILL: &str = "D9E2F3";
/// Fill of fact-sheet label cells.
pub const LABEL_FILL: &str = "F2F2F2";
/// Minimum height of header rows in twips.
pub const HEADER_ROW_HEIGHT: u32 = 420;
/// Minimum height of data rows in twips.
pub const DATA_ROW_HEIGHT: u32 = 340;

/// STT, name, position, unit, role.
pub const ATTENDEE_COLUMNS: [u32; 5] = [700, 2800, 2200, 2500, 2000];
/// STT, task, assignee, deadline, status.
pub const TASK_COLUMNS: [u32; 5] = [600, 3400, 2200, 1800, 2200];
/// Task columns on a landscape page.
pub const TASK_COLUMNS_LANDSCAPE: [u32; 5] = [700, 6000, 3400, 2000, 3000];
/// STT, type, summary, number, issuer.
pub const DOCUMENT_COLUMNS: [u32; 5] = [600, 1800, 3600, 1800, 2400];
/// Label, value.
pub const FACT_SHEET_COLUMNS: [u32; 2] = [3400, 6800];
/// Two equal halves of a portrait page.
pub const HALF_COLUMNS: [u32; 2] = [5100, 5100];
/// Aggregate summary: STT, title, kind, time, location, chair, format, status, tasks.
pub const SUMMARY_COLUMNS: [u32; 9] = [700, 3500, 1200, 1800, 2000, 2000, 1200, 1200, 1500];
/// Indicator, count.
pub const STATISTICS_COLUMNS: [u32; 2] = [9100, 6000];

const fn width_sum(widths: &[u32]) -> u32 {
    let mut sum = 0;
    let mut i = 0;
    while i < widths.len() {
        sum += widths[i];
        i += 1;
    }
    sum
}

const _: () = assert!(width_sum(&ATTENDEE_COLUMNS) == PORTRAIT_WIDTH);
const _: () = assert!(width_sum(&TASK_COLUMNS) == PORTRAIT_WIDTH);
const _: () = assert!(width_sum(&TASK_COLUMNS_LANDSCAPE) == LANDSCAPE_WIDTH);
const _: () = assert!(width_sum(&DOCUMENT_COLUMNS) == PORTRAIT_WIDTH);
const _: () = assert!(width_sum(&FACT_SHEET_COLUMNS) == PORTRAIT_WIDTH);
const _: () = assert!(width_sum(&HALF_COLUMNS) == PORTRAIT_WIDTH);
const _: () = assert!(width_sum(&SUMMARY_COLUMNS) == LANDSCAPE_WIDTH);
const _: () = assert!(width_sum(&STATISTICS_COLUMNS) == LANDSCAPE_WIDTH);

/// A validated description of a fixed-width grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    total_width: u32,
    column_widths: Vec<u32>,
    borders: BorderStyle,
}

impl TableSpec {
    /// Create a spec, failing if the widths do not sum to `total_width`.
    pub fn new(total_width: u32, column_widths: &[u32]) -> Result<Self> {
        let sum: u32 = column_widths.iter().sum();
        if column_widths.is_empty() || sum != total_width {
            return Err(Error::TableLayout {
                total: total_width,
                sum,
                columns: column_widths.len(),
            });
        }
        Ok(Self {
            total_width,
            column_widths: column_widths.to_vec(),
            borders: BorderStyle::Single,
        })
    }

    /// Set the border treatment.
    pub fn with_borders(mut self, borders: BorderStyle) -> Self {
        self.borders = borders;
        self
    }

    /// Total width in twips.
    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Assemble prebuilt rows, checking each has one cell per column.
    pub fn table(&self, rows: Vec<TableRow>) -> Result<Table> {
        let mut table = Table::new(self.total_width, self.column_widths.clone(), self.borders);
        for row in rows {
            if row.cells.len() != self.column_count() {
                return Err(Error::ColumnCount {
                    expected: self.column_count(),
                    found: row.cells.len(),
                });
            }
            table.add_row(row);
        }
        Ok(table)
    }

    /// Build a bordered grid from a header and text rows.
    ///
    /// Header cells are centered bold on a tinted fill. In data rows the
    /// first column is centered and the rest left aligned; a `\n` inside a
    /// cell starts a new paragraph.
    pub fn grid<S: AsRef<str>>(&self, header: &[&str], rows: &[Vec<S>]) -> Result<Table> {
        let mut built = Vec::with_capacity(rows.len() + 1);
        built.push(header_row(header));
        built.extend(rows.iter().map(|r| data_row(r.as_slice())));
        self.table(built)
    }
}

/// A header row: centered bold text on the header fill.
pub fn header_row(texts: &[&str]) -> TableRow {
    let style = style_of(Element::TableHeader);
    let cells = texts
        .iter()
        .map(|text| {
            TableCell::with_content(vec![style.paragraph(*text)])
                .shaded(HEADER_FILL)
                .aligned(VerticalAlignment::Center)
        })
        .collect();
    TableRow::header(cells).with_min_height(HEADER_ROW_HEIGHT)
}

/// A data row: first column centered, the rest left aligned.
pub fn data_row<S: AsRef<str>>(texts: &[S]) -> TableRow {
    let style = style_of(Element::TableCell);
    let cells = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mut cell_style = style;
            if i == 0 {
                cell_style.alignment = Alignment::Center;
            }
            TableCell::with_content(cell_lines(text.as_ref(), &cell_style))
                .aligned(VerticalAlignment::Center)
        })
        .collect();
    TableRow::new(cells).with_min_height(DATA_ROW_HEIGHT)
}

/// One paragraph per line of `text`, each trimmed.
pub fn cell_lines(text: &str, style: &StyleDirectives) -> Vec<Paragraph> {
    text.split('\n')
        .map(|line| style.paragraph(line.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rejects_unbalanced_widths() {
        let err = TableSpec::new(PORTRAIT_WIDTH, &[700, 2800, 2200, 2500, 1900]).unwrap_err();
        assert!(matches!(
            err,
            Error::TableLayout {
                total: 10200,
                sum: 10100,
                columns: 5
            }
        ));
        assert!(TableSpec::new(PORTRAIT_WIDTH, &[]).is_err());
    }

    #[test]
    fn test_grid_shapes_rows() {
        let spec = TableSpec::new(PORTRAIT_WIDTH, &TASK_COLUMNS).unwrap();
        let table = spec
            .grid(
                &["STT", "Nội dung nhiệm vụ", "Người/ĐV thực hiện", "Hạn hoàn thành", "Trạng thái"],
                &[vec!["1", "Rà soát", "Nguyễn Văn A\n(Văn phòng)", "30/06/2024", "Quá hạn"]],
            )
            .unwrap();

        assert_eq!(table.header_rows, 1);
        assert_eq!(table.row_count(), 2);
        assert!(table.widths_balanced());

        let header = &table.rows[0];
        assert_eq!(header.min_height, Some(HEADER_ROW_HEIGHT));
        assert_eq!(header.cells[0].shading.as_deref(), Some(HEADER_FILL));

        let data = &table.rows[1];
        assert_eq!(data.min_height, Some(DATA_ROW_HEIGHT));
        assert_eq!(data.cells[0].content[0].style.alignment, Alignment::Center);
        assert_eq!(data.cells[1].content[0].style.alignment, Alignment::Left);
        assert_eq!(data.cells[2].content.len(), 2);
        assert_eq!(data.cells[2].content[1].plain_text(), "(Văn phòng)");
    }

    #[test]
    fn test_grid_rejects_wrong_arity() {
        let spec = TableSpec::new(PORTRAIT_WIDTH, &HALF_COLUMNS).unwrap();
        let err = spec.grid(&["Chỉ tiêu"], &[vec!["a", "b"]]).unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnCount {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_borderless_spec() {
        let spec = TableSpec::new(PORTRAIT_WIDTH, &HALF_COLUMNS)
            .unwrap()
            .with_borders(BorderStyle::None);
        let table = spec.table(Vec::new()).unwrap();
        assert_eq!(table.borders, BorderStyle::None);
        assert!(table.is_empty());
    }
}
