//! WordprocessingML rendering.
//!
//! Output is a single Flat-OPC package: the XML form of a `.docx` that Word
//! opens directly. It carries the package relationships, the main document
//! part and, when the tree has metadata, the core and app property parts.

use crate::error::Result;
use crate::model::{
    Block, InlineContent, Metadata, PageSetup, Paragraph, ParagraphStyle, RenderedDocument,
    Table, TableCell, TableRow, TextRun, TextStyle,
};

use super::{RenderResult, RenderStats};

const NS_PKG: &str = "http://schemas.microsoft.com/office/2006/xmlPackage";
const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const REL_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const TYPE_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const TYPE_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const TYPE_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const TYPE_APP: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// Border width in eighths of a point.
const BORDER_SIZE: u32 = 4;

/// Convert a rendered document to a Flat-OPC WordprocessingML package.
pub fn to_wordml(doc: &RenderedDocument) -> Result<String> {
    WordMlRenderer::new().render(doc)
}

/// Convert a rendered document to WordprocessingML with statistics.
pub fn to_wordml_with_stats(doc: &RenderedDocument) -> Result<RenderResult> {
    WordMlRenderer::new().render_with_stats(doc)
}

/// WordprocessingML renderer.
#[derive(Debug, Default)]
pub struct WordMlRenderer {
    stats: RenderStats,
}

impl WordMlRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a document to a Flat-OPC package.
    pub fn render(mut self, doc: &RenderedDocument) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document, counting its structure along the way.
    pub fn render_with_stats(mut self, doc: &RenderedDocument) -> Result<RenderResult> {
        let content = self.render_internal(doc);
        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &RenderedDocument) -> String {
        let with_core = has_core_properties(&doc.metadata);
        let with_app = doc.metadata.creator.is_some();

        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
        output.push_str("<?mso-application progid=\"Word.Document\"?>\n");
        output.push_str(&format!("<pkg:package xmlns:pkg=\"{}\">\n", NS_PKG));

        self.render_relationships(&mut output, with_core, with_app);

        open_part(&mut output, "/word/document.xml", TYPE_DOCUMENT);
        output.push_str(&format!("<w:document xmlns:w=\"{}\"><w:body>", NS_W));
        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }
        render_section(&mut output, &doc.page);
        output.push_str("</w:body></w:document>");
        close_part(&mut output);

        if with_core {
            render_core_properties(&mut output, &doc.metadata);
        }
        if let Some(creator) = &doc.metadata.creator {
            render_app_properties(&mut output, creator);
        }

        output.push_str("</pkg:package>\n");

        log::debug!(
            "rendered WordprocessingML: {} paragraphs, {} tables, {} bytes",
            self.stats.paragraph_count,
            self.stats.table_count,
            output.len()
        );
        output
    }

    fn render_relationships(&self, output: &mut String, with_core: bool, with_app: bool) {
        open_part(output, "/_rels/.rels", TYPE_RELS);
        output.push_str(&format!("<Relationships xmlns=\"{}\">", NS_RELS));
        relationship(output, "rId1", REL_DOCUMENT, "word/document.xml");
        if with_core {
            relationship(output, "rId2", REL_CORE, "docProps/core.xml");
        }
        if with_app {
            relationship(output, "rId3", REL_APP, "docProps/app.xml");
        }
        output.push_str("</Relationships>");
        close_part(output);
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        match block {
            Block::Paragraph(p) => {
                self.stats.add_paragraph();
                self.render_paragraph(output, p);
            }
            Block::Table(t) => {
                self.stats.add_table(t.row_count());
                self.render_table(output, t);
            }
            Block::PageBreak => {
                self.stats.add_page_break();
                output.push_str("<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>");
            }
        }
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        output.push_str("<w:p>");
        render_paragraph_properties(output, &para.style);
        for item in &para.content {
            match item {
                InlineContent::Text(run) => {
                    self.stats.count_text(&run.text);
                    render_run(output, run);
                }
                InlineContent::Tab => output.push_str("<w:r><w:tab/></w:r>"),
            }
        }
        output.push_str("</w:p>");
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        output.push_str("<w:tbl><w:tblPr>");
        output.push_str(&format!(
            "<w:tblW w:w=\"{}\" w:type=\"dxa\"/>",
            table.total_width
        ));
        output.push_str("<w:tblBorders>");
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            match table.borders.color() {
                Some(color) => output.push_str(&format!(
                    "<w:{} w:val=\"single\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
                    side, BORDER_SIZE, color
                )),
                None => output.push_str(&format!("<w:{} w:val=\"nil\"/>", side)),
            }
        }
        output.push_str("</w:tblBorders>");
        output.push_str("<w:tblLayout w:type=\"fixed\"/>");
        output.push_str("</w:tblPr>");

        output.push_str("<w:tblGrid>");
        for width in &table.column_widths {
            output.push_str(&format!("<w:gridCol w:w=\"{}\"/>", width));
        }
        output.push_str("</w:tblGrid>");

        for row in &table.rows {
            self.render_row(output, row, &table.column_widths);
        }
        output.push_str("</w:tbl>");
    }

    fn render_row(&mut self, output: &mut String, row: &TableRow, widths: &[u32]) {
        output.push_str("<w:tr>");
        if row.min_height.is_some() || row.is_header {
            output.push_str("<w:trPr>");
            if let Some(height) = row.min_height {
                output.push_str(&format!(
                    "<w:trHeight w:val=\"{}\" w:hRule=\"atLeast\"/>",
                    height
                ));
            }
            if row.is_header {
                output.push_str("<w:tblHeader/>");
            }
            output.push_str("</w:trPr>");
        }
        for (i, cell) in row.cells.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(0);
            self.render_cell(output, cell, width);
        }
        output.push_str("</w:tr>");
    }

    fn render_cell(&mut self, output: &mut String, cell: &TableCell, width: u32) {
        output.push_str("<w:tc><w:tcPr>");
        output.push_str(&format!("<w:tcW w:w=\"{}\" w:type=\"dxa\"/>", width));
        if let Some(fill) = &cell.shading {
            output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
                escape_xml(fill)
            ));
        }
        output.push_str(&format!(
            "<w:vAlign w:val=\"{}\"/>",
            cell.vertical_alignment.as_wordml()
        ));
        output.push_str("</w:tcPr>");

        // A cell must hold at least one paragraph.
        if cell.content.is_empty() {
            output.push_str("<w:p/>");
        }
        for para in &cell.content {
            self.render_paragraph(output, para);
        }
        output.push_str("</w:tc>");
    }
}

fn open_part(output: &mut String, name: &str, content_type: &str) {
    output.push_str(&format!(
        "<pkg:part pkg:name=\"{}\" pkg:contentType=\"{}\"><pkg:xmlData>",
        name, content_type
    ));
}

fn close_part(output: &mut String) {
    output.push_str("</pkg:xmlData></pkg:part>\n");
}

fn relationship(output: &mut String, id: &str, rel_type: &str, target: &str) {
    output.push_str(&format!(
        "<Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"/>",
        id, rel_type, target
    ));
}

fn render_paragraph_properties(output: &mut String, style: &ParagraphStyle) {
    output.push_str("<w:pPr>");
    if style.top_rule {
        output.push_str(&format!(
            "<w:pBdr><w:top w:val=\"single\" w:sz=\"{}\" w:space=\"1\" w:color=\"auto\"/></w:pBdr>",
            BORDER_SIZE
        ));
    }
    if let Some(pos) = style.right_tab {
        output.push_str(&format!(
            "<w:tabs><w:tab w:val=\"right\" w:pos=\"{}\"/></w:tabs>",
            pos
        ));
    }
    output.push_str(&format!(
        "<w:spacing w:before=\"{}\" w:after=\"{}\"",
        style.space_before, style.space_after
    ));
    if style.line_spacing > 0 {
        output.push_str(&format!(
            " w:line=\"{}\" w:lineRule=\"auto\"",
            style.line_spacing
        ));
    }
    output.push_str("/>");
    if style.first_line_indent > 0 {
        output.push_str(&format!(
            "<w:ind w:firstLine=\"{}\"/>",
            style.first_line_indent
        ));
    }
    output.push_str(&format!("<w:jc w:val=\"{}\"/>", style.alignment.as_wordml()));
    output.push_str("</w:pPr>");
}

fn render_run(output: &mut String, run: &TextRun) {
    output.push_str("<w:r>");
    render_run_properties(output, &run.style);
    output.push_str(&format!(
        "<w:t xml:space=\"preserve\">{}</w:t>",
        escape_xml(&run.text)
    ));
    output.push_str("</w:r>");
}

fn render_run_properties(output: &mut String, style: &TextStyle) {
    let font = escape_xml(&style.font_name);
    output.push_str("<w:rPr>");
    output.push_str(&format!(
        "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:cs=\"{0}\"/>",
        font
    ));
    if style.bold {
        output.push_str("<w:b/><w:bCs/>");
    }
    if style.italic {
        output.push_str("<w:i/><w:iCs/>");
    }
    let size = style.half_points();
    output.push_str(&format!("<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", size));
    if style.underline {
        output.push_str("<w:u w:val=\"single\"/>");
    }
    output.push_str("</w:rPr>");
}

fn render_section(output: &mut String, page: &PageSetup) {
    output.push_str("<w:sectPr>");
    output.push_str(&format!(
        "<w:pgSz w:w=\"{}\" w:h=\"{}\"",
        page.width, page.height
    ));
    if page.is_landscape() {
        output.push_str(" w:orient=\"landscape\"");
    }
    output.push_str("/>");
    let m = &page.margins;
    output.push_str(&format!(
        "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"{}\" w:footer=\"{}\" w:gutter=\"0\"/>",
        m.top, m.right, m.bottom, m.left, m.header, m.footer
    ));
    output.push_str("</w:sectPr>");
}

fn has_core_properties(meta: &Metadata) -> bool {
    meta.title.is_some()
        || meta.author.is_some()
        || meta.subject.is_some()
        || !meta.keywords.is_empty()
        || meta.created.is_some()
}

fn render_core_properties(output: &mut String, meta: &Metadata) {
    open_part(output, "/docProps/core.xml", TYPE_CORE);
    output.push_str(concat!(
        "<cp:coreProperties",
        " xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\"",
        " xmlns:dc=\"http://purl.org/dc/elements/1.1/\"",
        " xmlns:dcterms=\"http://purl.org/dc/terms/\"",
        " xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">"
    ));
    if let Some(title) = &meta.title {
        output.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    }
    if let Some(subject) = &meta.subject {
        output.push_str(&format!("<dc:subject>{}</dc:subject>", escape_xml(subject)));
    }
    if let Some(author) = &meta.author {
        output.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(author)));
    }
    if !meta.keywords.is_empty() {
        output.push_str(&format!(
            "<cp:keywords>{}</cp:keywords>",
            escape_xml(&meta.keywords.join(", "))
        ));
    }
    if let Some(created) = meta.created {
        output.push_str(&format!(
            "<dcterms:created xsi:type=\"dcterms:W3CDTF\">{}</dcterms:created>",
            created.format("%Y-%m-%dT%H:%M:%SZ")
        ));
    }
    output.push_str("</cp:coreProperties>");
    close_part(output);
}

fn render_app_properties(output: &mut String, creator: &str) {
    open_part(output, "/docProps/app.xml", TYPE_APP);
    output.push_str(
        "<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">",
    );
    output.push_str(&format!(
        "<Application>{}</Application>",
        escape_xml(creator)
    ));
    output.push_str("</Properties>");
    close_part(output);
}

/// Escape the five XML special characters and drop control characters
/// that XML 1.0 cannot carry.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, BorderStyle, VerticalAlignment};

    fn para(text: &str) -> Paragraph {
        Paragraph::styled(text, ParagraphStyle::default(), TextStyle::default())
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A & B <c> \"d\" 'e'"), "A &amp; B &lt;c&gt; &quot;d&quot; &apos;e&apos;");
        assert_eq!(escape_xml("a\u{0001}b"), "ab");
        assert_eq!(escape_xml("Điều 1"), "Điều 1");
    }

    #[test]
    fn test_package_skeleton() {
        let xml = to_wordml(&RenderedDocument::default()).unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<?mso-application progid=\"Word.Document\"?>"));
        assert!(xml.contains("pkg:name=\"/_rels/.rels\""));
        assert!(xml.contains("pkg:name=\"/word/document.xml\""));
        assert!(!xml.contains("/docProps/core.xml"));
        assert!(xml.contains("<w:pgSz w:w=\"11906\" w:h=\"16838\"/>"));
        assert!(xml.trim_end().ends_with("</pkg:package>"));
    }

    #[test]
    fn test_paragraph_properties() {
        let style = ParagraphStyle {
            alignment: Alignment::Justify,
            first_line_indent: 567,
            line_spacing: 288,
            space_before: 0,
            space_after: 120,
            right_tab: Some(10200),
            top_rule: true,
        };
        let run_style = TextStyle {
            bold: true,
            italic: true,
            font_size: 13.0,
            ..Default::default()
        };
        let mut doc = RenderedDocument::default();
        doc.add_block(Paragraph::styled("Số: 01 & 02", style, run_style));
        let xml = to_wordml(&doc).unwrap();

        assert!(xml.contains("<w:jc w:val=\"both\"/>"));
        assert!(xml.contains("<w:ind w:firstLine=\"567\"/>"));
        assert!(xml.contains(
            "<w:spacing w:before=\"0\" w:after=\"120\" w:line=\"288\" w:lineRule=\"auto\"/>"
        ));
        assert!(xml.contains("<w:tab w:val=\"right\" w:pos=\"10200\"/>"));
        assert!(xml.contains("<w:pBdr><w:top"));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("<w:i/>"));
        assert!(xml.contains("<w:sz w:val=\"26\"/>"));
        assert!(xml.contains("w:ascii=\"Times New Roman\""));
        assert!(xml.contains(">Số: 01 &amp; 02</w:t>"));
    }

    #[test]
    fn test_table_markup() {
        let mut table = Table::new(10200, vec![4000, 6200], BorderStyle::None);
        table.add_row(
            TableRow::header(vec![
                TableCell::with_content(vec![para("A")]).shaded("D9E2F3"),
                TableCell::with_content(vec![]).aligned(VerticalAlignment::Center),
            ])
            .with_min_height(400),
        );
        let mut doc = RenderedDocument::default();
        doc.add_block(table);
        let result = to_wordml_with_stats(&doc).unwrap();
        let xml = &result.content;

        assert!(xml.contains("<w:tblW w:w=\"10200\" w:type=\"dxa\"/>"));
        assert!(xml.contains("<w:top w:val=\"nil\"/>"));
        assert!(xml.contains("<w:tblLayout w:type=\"fixed\"/>"));
        assert!(xml.contains("<w:gridCol w:w=\"4000\"/><w:gridCol w:w=\"6200\"/>"));
        assert!(xml.contains("<w:trHeight w:val=\"400\" w:hRule=\"atLeast\"/><w:tblHeader/>"));
        assert!(xml.contains("w:fill=\"D9E2F3\""));
        assert!(xml.contains("<w:vAlign w:val=\"center\"/></w:tcPr><w:p/>"));
        assert_eq!(result.stats.table_count, 1);
        assert_eq!(result.stats.table_row_count, 1);
    }

    #[test]
    fn test_landscape_and_page_break() {
        let mut doc = RenderedDocument::new(PageSetup::landscape());
        doc.add_block(para("một"));
        doc.add_block(Block::PageBreak);
        doc.add_block(para("hai"));
        let xml = to_wordml(&doc).unwrap();
        assert!(xml.contains("w:orient=\"landscape\""));
        assert_eq!(xml.matches("<w:br w:type=\"page\"/>").count(), 1);
        assert!(xml.contains("w:top=\"850\""));
    }

    #[test]
    fn test_metadata_parts() {
        let mut doc = RenderedDocument::default();
        doc.metadata.title = Some("Biên bản <họp>".into());
        doc.metadata.creator = Some("vanban".into());
        doc.metadata.keywords = vec!["giao ban".into(), "quý I".into()];
        doc.metadata.created = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5);
        let xml = to_wordml(&doc).unwrap();
        assert!(xml.contains("<dc:title>Biên bản &lt;họp&gt;</dc:title>"));
        assert!(xml.contains("<cp:keywords>giao ban, quý I</cp:keywords>"));
        assert!(xml.contains(">2024-01-02T03:04:05Z</dcterms:created>"));
        assert!(xml.contains("<Application>vanban</Application>"));
        assert!(xml.contains("Target=\"docProps/app.xml\""));
    }
}
