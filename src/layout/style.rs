//! The style table.
//!
//! Every typographic decision in the crate is made here: body roles map to
//! directives through [`style_for`], fixed structural fragments through
//! [`style_of`]. Builders never spell out a font size or spacing themselves.

use super::classify::Role;
use crate::model::{Alignment, Paragraph, ParagraphStyle, TextRun, TextStyle};
use serde::{Deserialize, Serialize};

/// Font family used throughout.
pub const FONT_FAMILY: &str = "Times New Roman";

/// Footer text size in points.
pub const SIZE_FOOTER: f32 = 11.0;
/// Recipient list size in points.
pub const SIZE_SMALL: f32 = 12.0;
/// Table and secondary text size in points.
pub const SIZE_TABLE: f32 = 13.0;
/// Body text size in points.
pub const SIZE_BODY: f32 = 14.0;
/// Document title size in points.
pub const SIZE_TITLE: f32 = 16.0;

/// Spacing in twentieths of a point.
pub const SPACING_SMALL: u32 = 80;
/// Spacing in twentieths of a point.
pub const SPACING_MEDIUM: u32 = 120;
/// Spacing in twentieths of a point.
pub const SPACING_LARGE: u32 = 240;

/// Single line spacing.
pub const LINE_SINGLE: u32 = 240;
/// Line spacing of body text, 1.3 lines.
pub const LINE_BODY: u32 = 312;

/// Standard first-line indent, 1 cm.
pub const INDENT: u32 = 567;
/// First-line indent of lettered points, 1.5 cm.
pub const INDENT_DEEP: u32 = 851;

/// Resolved typographic directives for one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleDirectives {
    /// Font size in points
    pub font_size: f32,
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Justification
    pub alignment: Alignment,
    /// First-line indent in twips
    pub first_line_indent: u32,
    /// Line spacing in 240ths of a line
    pub line_spacing: u32,
    /// Space before in twips
    pub space_before: u32,
    /// Space after in twips
    pub space_after: u32,
}

impl StyleDirectives {
    fn base(font_size: f32, alignment: Alignment) -> Self {
        Self {
            font_size,
            bold: false,
            italic: false,
            underline: false,
            alignment,
            first_line_indent: 0,
            line_spacing: LINE_SINGLE,
            space_before: 0,
            space_after: 0,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    fn indent(mut self, twips: u32) -> Self {
        self.first_line_indent = twips;
        self
    }

    fn body_spacing(mut self) -> Self {
        self.line_spacing = LINE_BODY;
        self
    }

    fn before(mut self, twips: u32) -> Self {
        self.space_before = twips;
        self
    }

    fn after(mut self, twips: u32) -> Self {
        self.space_after = twips;
        self
    }

    /// Paragraph-level part of the directives.
    pub fn paragraph_style(&self) -> ParagraphStyle {
        ParagraphStyle {
            alignment: self.alignment,
            first_line_indent: self.first_line_indent,
            line_spacing: self.line_spacing,
            space_before: self.space_before,
            space_after: self.space_after,
            right_tab: None,
            top_rule: false,
        }
    }

    /// Run-level part of the directives.
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            font_name: FONT_FAMILY.to_string(),
            font_size: self.font_size,
        }
    }

    /// A run of text in this style.
    pub fn run(&self, text: impl Into<String>) -> TextRun {
        TextRun::new(text, self.text_style())
    }

    /// A single-run paragraph in this style.
    pub fn paragraph(&self, text: impl Into<String>) -> Paragraph {
        Paragraph::styled(text, self.paragraph_style(), self.text_style())
    }
}

/// Fixed structural fragments that are not classified body lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    /// "CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM"
    NationalName,
    /// "Độc lập - Tự do - Hạnh phúc"
    Motto,
    /// Short rule under the motto
    HeadingRule,
    /// Parent organization line
    ParentOrg,
    /// Sub-organization line, underlined
    SubOrg,
    /// "Số: ... / Ngày ..." line
    NumberDate,
    /// Document kind label, e.g. "QUYẾT ĐỊNH"
    KindLabel,
    /// Subject line under the kind label
    Subject,
    /// Issuing authority line of decision kinds
    AuthorityLine,
    /// "Kính gửi: ..."
    Salutation,
    /// One legal basis
    LegalBasis,
    /// "QUYẾT ĐỊNH:" before the articles
    DecisionLabel,
    /// "Nơi nhận:"
    RecipientsLabel,
    /// One recipient
    Recipient,
    /// Place and date above the signature
    PlaceDate,
    /// Authority qualifier above the signer title
    SignerQualifier,
    /// Signer title
    SignerTitle,
    /// "(Ký, ghi rõ họ tên và đóng dấu)"
    SignInstruction,
    /// Printed signer name
    SignerName,
    /// Right-aligned date line of meeting records
    DateLine,
    /// Large centered title, e.g. "BIÊN BẢN"
    DocumentTitle,
    /// Centered line under a document title
    DocumentSubtitle,
    /// Centered secondary line in table-size type
    Caption,
    /// Numbered section title, e.g. "I. THÀNH PHẦN THAM DỰ"
    SectionTitle,
    /// Bold lead-in inside a section, e.g. "Kết luận:"
    Label,
    /// Plain indented text line
    BodyText,
    /// Unindented entry heading in a list of meetings
    EntryTitle,
    /// Unindented detail line in table-size type
    EntryDetail,
    /// Header cell text
    TableHeader,
    /// Data cell text
    TableCell,
    /// Label cell text of a fact sheet
    TableLabel,
    /// Value cell text of a fact sheet
    TableValue,
    /// Blank spacing line
    Spacer,
    /// Rule line above the footer
    FooterRule,
    /// Export footer text
    Footer,
}

/// Directives for a classified body line.
pub fn style_for(role: Role) -> StyleDirectives {
    match role {
        Role::SectionHeading => StyleDirectives::base(SIZE_BODY, Alignment::Center)
            .bold()
            .body_spacing()
            .before(SPACING_LARGE)
            .after(SPACING_SMALL),
        Role::Article => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .bold()
            .body_spacing()
            .before(SPACING_MEDIUM),
        Role::Clause => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .indent(INDENT)
            .body_spacing()
            .before(SPACING_SMALL),
        Role::Point => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .indent(INDENT_DEEP)
            .body_spacing(),
        Role::Paragraph => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .indent(INDENT)
            .body_spacing(),
    }
}

/// Directives for a fixed structural fragment.
pub fn style_of(element: Element) -> StyleDirectives {
    use Element::*;

    match element {
        NationalName => StyleDirectives::base(SIZE_TABLE, Alignment::Center).bold(),
        Motto => StyleDirectives::base(SIZE_BODY, Alignment::Center).bold(),
        HeadingRule => StyleDirectives::base(SIZE_BODY, Alignment::Center).after(SPACING_LARGE),
        ParentOrg => StyleDirectives::base(SIZE_TABLE, Alignment::Center).bold(),
        SubOrg => StyleDirectives::base(SIZE_TABLE, Alignment::Center)
            .bold()
            .underline(),
        NumberDate => StyleDirectives::base(SIZE_TABLE, Alignment::Left)
            .italic()
            .after(SPACING_LARGE),
        KindLabel => StyleDirectives::base(SIZE_TITLE, Alignment::Center).bold(),
        Subject => StyleDirectives::base(SIZE_BODY, Alignment::Center)
            .italic()
            .after(SPACING_LARGE),
        AuthorityLine => StyleDirectives::base(SIZE_BODY, Alignment::Center)
            .bold()
            .after(SPACING_LARGE),
        Salutation => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .indent(INDENT)
            .body_spacing()
            .after(SPACING_MEDIUM),
        LegalBasis => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .italic()
            .indent(INDENT)
            .body_spacing(),
        DecisionLabel => StyleDirectives::base(SIZE_BODY, Alignment::Center)
            .bold()
            .after(SPACING_MEDIUM),
        RecipientsLabel => StyleDirectives::base(SIZE_SMALL, Alignment::Left)
            .bold()
            .italic()
            .after(SPACING_SMALL),
        Recipient => StyleDirectives::base(SIZE_FOOTER, Alignment::Left),
        PlaceDate => StyleDirectives::base(SIZE_BODY, Alignment::Center)
            .italic()
            .after(SPACING_MEDIUM),
        SignerQualifier | SignerTitle | SignerName => {
            StyleDirectives::base(SIZE_BODY, Alignment::Center).bold()
        }
        SignInstruction => StyleDirectives::base(SIZE_BODY, Alignment::Center)
            .italic()
            .after(SPACING_MEDIUM),
        DateLine => StyleDirectives::base(SIZE_TABLE, Alignment::Right)
            .italic()
            .body_spacing()
            .after(SPACING_SMALL),
        DocumentTitle => StyleDirectives::base(SIZE_TITLE, Alignment::Center).bold(),
        DocumentSubtitle => StyleDirectives::base(SIZE_BODY, Alignment::Center)
            .bold()
            .body_spacing(),
        Caption => StyleDirectives::base(SIZE_TABLE, Alignment::Center).body_spacing(),
        SectionTitle => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .bold()
            .body_spacing()
            .before(SPACING_MEDIUM)
            .after(SPACING_SMALL),
        Label => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .bold()
            .indent(INDENT)
            .body_spacing(),
        BodyText => style_for(Role::Paragraph),
        EntryTitle => StyleDirectives::base(SIZE_BODY, Alignment::Justify)
            .bold()
            .body_spacing(),
        EntryDetail => StyleDirectives::base(SIZE_TABLE, Alignment::Justify)
            .italic()
            .body_spacing(),
        TableHeader => StyleDirectives::base(SIZE_TABLE, Alignment::Center).bold(),
        TableCell => StyleDirectives::base(SIZE_TABLE, Alignment::Left),
        TableLabel => StyleDirectives::base(SIZE_TABLE, Alignment::Left).bold(),
        TableValue => StyleDirectives::base(SIZE_BODY, Alignment::Left),
        Spacer => StyleDirectives::base(SIZE_BODY, Alignment::Left),
        FooterRule => StyleDirectives::base(SIZE_FOOTER, Alignment::Left).after(60),
        Footer => StyleDirectives::base(SIZE_FOOTER, Alignment::Right).italic(),
    }
}
