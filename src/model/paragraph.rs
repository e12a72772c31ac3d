//! Paragraph and text-level types.

use crate::layout::Role;
use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content in order
    pub content: Vec<InlineContent>,

    /// Paragraph style
    pub style: ParagraphStyle,

    /// Role assigned by the line classifier, for body lines only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            style: ParagraphStyle::default(),
            role: None,
        }
    }

    /// Create a paragraph with a single styled run.
    pub fn styled(text: impl Into<String>, style: ParagraphStyle, run_style: TextStyle) -> Self {
        let mut p = Self::new();
        p.style = style;
        p.add_run(TextRun {
            text: text.into(),
            style: run_style,
        });
        p
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.content.push(InlineContent::Text(run));
    }

    /// Add a tab character.
    pub fn add_tab(&mut self) {
        self.content.push(InlineContent::Tab);
    }

    /// Text runs of the paragraph.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.content.iter().filter_map(|c| match c {
            InlineContent::Text(run) => Some(run),
            _ => None,
        })
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                InlineContent::Text(run) => run.text.as_str(),
                InlineContent::Tab => "\t",
            })
            .collect()
    }

    /// Check if the paragraph carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs().all(|r| r.text.trim().is_empty())
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineContent {
    /// A text run with styling
    Text(TextRun),

    /// A tab character
    Tab,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Text styling properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font name
    pub font_name: String,

    /// Font size in points
    pub font_size: f32,
}

impl TextStyle {
    /// Font size in half-points, the unit WordprocessingML uses.
    pub fn half_points(&self) -> u32 {
        (self.font_size * 2.0).round() as u32
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            font_name: crate::layout::FONT_FAMILY.to_string(),
            font_size: 14.0,
        }
    }
}

/// Paragraph styling properties. Lengths are in twips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    pub alignment: Alignment,

    /// First line indent
    pub first_line_indent: u32,

    /// Line spacing in 240ths of a line (240 = single)
    pub line_spacing: u32,

    /// Space before paragraph
    pub space_before: u32,

    /// Space after paragraph
    pub space_after: u32,

    /// Right-aligned tab stop position, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_tab: Option<u32>,

    /// Draw a rule above the paragraph
    #[serde(default)]
    pub top_rule: bool,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified on both sides
    Justify,
}

impl Alignment {
    /// WordprocessingML `w:jc` value.
    pub fn as_wordml(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}
