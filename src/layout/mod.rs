//! Layout rules: line classification, the style table, fixed-width tables
//! and Vietnamese date formatting.
//!
//! All lengths are in twips (1/1440 inch) unless stated otherwise.

mod classify;
pub mod format;
mod line;
mod style;
mod table;

use crate::model::Margins;

pub use classify::{classify, LineClassifier, Role, UPPERCASE_HEADING_MAX_CHARS};
pub use line::{body_lines, Line};
pub use style::{
    style_for, style_of, Element, StyleDirectives, FONT_FAMILY, INDENT, INDENT_DEEP, LINE_BODY,
    LINE_SINGLE, SIZE_BODY, SIZE_FOOTER, SIZE_SMALL, SIZE_TABLE, SIZE_TITLE, SPACING_LARGE,
    SPACING_MEDIUM, SPACING_SMALL,
};
pub use table::{
    cell_lines, data_row, header_row, TableSpec, ATTENDEE_COLUMNS, DATA_ROW_HEIGHT,
    DOCUMENT_COLUMNS, FACT_SHEET_COLUMNS, HALF_COLUMNS, HEADER_FILL, HEADER_ROW_HEIGHT,
    LABEL_FILL, STATISTICS_COLUMNS, SUMMARY_COLUMNS, TASK_COLUMNS, TASK_COLUMNS_LANDSCAPE,
};

/// Short edge of an A4 sheet.
pub const A4_SHORT_EDGE: u32 = 11906;
/// Long edge of an A4 sheet.
pub const A4_LONG_EDGE: u32 = 16838;

/// Margins of portrait pages: top 2 cm, bottom 1.5 cm, left 2 cm, right 1 cm.
pub const PORTRAIT_MARGINS: Margins = Margins {
    top: 1134,
    bottom: 850,
    left: 1134,
    right: 567,
    header: 708,
    footer: 708,
};

/// Margins of landscape pages.
pub const LANDSCAPE_MARGINS: Margins = Margins {
    top: 850,
    bottom: 850,
    left: 1134,
    right: 567,
    header: 708,
    footer: 708,
};

/// Width shared by every table on a portrait page.
pub const PORTRAIT_WIDTH: u32 = 10200;
/// Width shared by every table on a landscape page.
pub const LANDSCAPE_WIDTH: u32 = 15100;

const _: () = assert!(PORTRAIT_WIDTH <= A4_SHORT_EDGE - PORTRAIT_MARGINS.left - PORTRAIT_MARGINS.right);
const _: () = assert!(LANDSCAPE_WIDTH <= A4_LONG_EDGE - LANDSCAPE_MARGINS.left - LANDSCAPE_MARGINS.right);
