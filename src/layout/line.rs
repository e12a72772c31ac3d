//! Classified body lines.

use super::classify::{LineClassifier, Role};
use super::style::{style_for, style_of, Element, StyleDirectives};
use crate::model::Paragraph;

/// One body line with its role and resolved style. Transient.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
    /// Trimmed text
    pub text: &'a str,
    /// Role, `None` for blank lines
    pub role: Option<Role>,
    /// Resolved directives
    pub style: StyleDirectives,
}

impl<'a> Line<'a> {
    /// Classify one raw line with the given classifier.
    pub fn classify_with(classifier: &LineClassifier, raw: &'a str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self {
                text,
                role: None,
                style: style_of(Element::Spacer),
            };
        }
        let role = classifier.classify(text);
        Self {
            text,
            role: Some(role),
            style: style_for(role),
        }
    }

    /// Classify one raw line with the shared classifier.
    pub fn classify(raw: &'a str) -> Self {
        Self::classify_with(LineClassifier::shared(), raw)
    }

    /// Check if the line is blank.
    pub fn is_blank(&self) -> bool {
        self.role.is_none()
    }

    /// Materialize the line as a paragraph.
    ///
    /// Blank lines become spacing-only paragraphs with body line spacing.
    pub fn into_paragraph(self) -> Paragraph {
        match self.role {
            Some(role) => {
                let mut p = self.style.paragraph(self.text);
                p.role = Some(role);
                p
            }
            None => {
                let mut style = self.style.paragraph_style();
                style.line_spacing = style_for(Role::Paragraph).line_spacing;
                Paragraph::styled("", style, self.style.text_style())
            }
        }
    }
}

/// Split body text on any line ending and classify every line.
pub fn body_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .map(Line::classify)
}
