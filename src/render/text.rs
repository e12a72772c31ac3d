//! Plain-text preview of composed documents.

use crate::error::Result;
use crate::model::{Block, RenderedDocument, Table};

use super::RenderOptions;

/// Marker line written for page breaks when requested.
pub const PAGE_BREAK_MARKER: &str = "----- ngắt trang -----";

/// Convert a rendered document to plain text.
///
/// Paragraphs become lines, table rows become tab-separated lines and
/// multi-paragraph cells are joined with ` / `.
pub fn to_text(doc: &RenderedDocument, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => {
                output.push_str(&p.plain_text());
                output.push('\n');
            }
            Block::Table(t) => render_table(&mut output, t),
            Block::PageBreak => {
                if options.mark_page_breaks {
                    output.push_str(PAGE_BREAK_MARKER);
                    output.push('\n');
                } else {
                    output.push('\n');
                }
            }
        }
    }

    Ok(output.trim_end().to_string())
}

fn render_table(output: &mut String, table: &Table) {
    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                cell.content
                    .iter()
                    .map(|p| p.plain_text())
                    .filter(|t| !t.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(" / ")
            })
            .collect();
        output.push_str(&cells.join("\t"));
        output.push('\n');
    }
}
