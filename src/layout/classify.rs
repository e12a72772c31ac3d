//! Line classification for document bodies.
//!
//! A body line is matched against an ordered rule table. The first rule
//! that matches decides the [`Role`]; a line no rule matches is a plain
//! paragraph, so classification is total.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum length, in characters, of an all-caps line treated as a heading.
pub const UPPERCASE_HEADING_MAX_CHARS: usize = 80;

/// Semantic role of one body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Chapter, part or section heading ("Chương I", "MỤC 2", all-caps titles)
    SectionHeading,
    /// Article ("Điều 5. ...")
    Article,
    /// Numbered clause ("1. ...")
    Clause,
    /// Lettered point ("a) ...")
    Point,
    /// Anything else
    Paragraph,
}

impl Role {
    /// All roles in precedence order.
    pub const ALL: [Role; 5] = [
        Role::SectionHeading,
        Role::Article,
        Role::Clause,
        Role::Point,
        Role::Paragraph,
    ];
}

/// A single classification test.
#[derive(Debug)]
enum Matcher {
    Pattern(Regex),
    UppercaseTitle,
}

impl Matcher {
    fn matches(&self, line: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(line),
            Matcher::UppercaseTitle => is_uppercase_title(line),
        }
    }
}

/// Ordered rule table mapping body lines to roles.
#[derive(Debug)]
pub struct LineClassifier {
    rules: Vec<(Role, Matcher)>,
}

impl LineClassifier {
    /// Build the classifier with the standard rule table.
    pub fn new() -> Self {
        Self {
            rules: vec![
                (
                    Role::SectionHeading,
                    Matcher::Pattern(
                        Regex::new(
                            r"^(?i:chương|phần|mục)\s+(?:(?i:thứ)\s+)?(?:[IVXLCDM]+|\d+|(?i:nhất|một|hai|ba|bốn|tư|năm|sáu|bảy|tám|chín|mười))\b",
                        )
                        .unwrap(),
                    ),
                ),
                (Role::SectionHeading, Matcher::UppercaseTitle),
                (
                    Role::Article,
                    Matcher::Pattern(Regex::new(r"^(?i:điều)\s+\d+").unwrap()),
                ),
                (
                    Role::Clause,
                    Matcher::Pattern(Regex::new(r"^\d+\.\s+\p{L}").unwrap()),
                ),
                (
                    Role::Point,
                    Matcher::Pattern(Regex::new(r"^\p{Ll}\)\s").unwrap()),
                ),
            ],
        }
    }

    /// Process-wide classifier instance.
    pub fn shared() -> &'static LineClassifier {
        static SHARED: OnceLock<LineClassifier> = OnceLock::new();
        SHARED.get_or_init(LineClassifier::new)
    }

    /// Classify one line.
    ///
    /// The line is trimmed and NFC-normalized first. A blank line classifies
    /// as [`Role::Paragraph`]; composers render blank lines as spacers and
    /// never ask.
    pub fn classify(&self, line: &str) -> Role {
        let line: String = line.trim().nfc().collect();
        if line.is_empty() {
            return Role::Paragraph;
        }
        self.rules
            .iter()
            .find(|(_, matcher)| matcher.matches(&line))
            .map(|(role, _)| *role)
            .unwrap_or(Role::Paragraph)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one line with the shared classifier.
pub fn classify(line: &str) -> Role {
    LineClassifier::shared().classify(line)
}

/// All letters upper-case, only letters and whitespace, and short enough.
///
/// Diacritics are ignored: combining marks left over from decomposed input
/// are skipped rather than counted as non-letters.
fn is_uppercase_title(line: &str) -> bool {
    if line.chars().count() > UPPERCASE_HEADING_MAX_CHARS {
        return false;
    }
    let mut letters = 0;
    for c in line.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            continue;
        }
        if !c.is_uppercase() {
            return false;
        }
        letters += 1;
    }
    letters > 0
}
