//! Render tree types.
//!
//! This module defines the format-agnostic tree the composer produces and
//! the renderers serialize: paragraphs with resolved styles, fixed-width
//! tables and page breaks, plus page geometry and package metadata.

mod document;
mod page;
mod paragraph;
mod table;

pub use document::{Metadata, RenderedDocument};
pub use page::{Block, Margins, Orientation, PageSetup};
pub use paragraph::{Alignment, InlineContent, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use table::{BorderStyle, Table, TableCell, TableRow, VerticalAlignment};
