//! Page geometry and content blocks.

use super::{Paragraph, Table};
use crate::layout::{
    A4_LONG_EDGE, A4_SHORT_EDGE, LANDSCAPE_MARGINS, LANDSCAPE_WIDTH, PORTRAIT_MARGINS,
    PORTRAIT_WIDTH,
};
use serde::{Deserialize, Serialize};

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Portrait (default)
    #[default]
    Portrait,
    /// Landscape
    Landscape,
}

/// Page margins in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: u32,
    /// Bottom margin
    pub bottom: u32,
    /// Left margin
    pub left: u32,
    /// Right margin
    pub right: u32,
    /// Header distance
    pub header: u32,
    /// Footer distance
    pub footer: u32,
}

/// Page size, orientation and margins. Lengths are in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width
    pub width: u32,

    /// Page height
    pub height: u32,

    /// Orientation
    pub orientation: Orientation,

    /// Margins
    pub margins: Margins,
}

impl PageSetup {
    /// A4 portrait page.
    pub fn portrait() -> Self {
        Self {
            width: A4_SHORT_EDGE,
            height: A4_LONG_EDGE,
            orientation: Orientation::Portrait,
            margins: PORTRAIT_MARGINS,
        }
    }

    /// A4 landscape page.
    pub fn landscape() -> Self {
        Self {
            width: A4_LONG_EDGE,
            height: A4_SHORT_EDGE,
            orientation: Orientation::Landscape,
            margins: LANDSCAPE_MARGINS,
        }
    }

    /// Width available to content between the side margins.
    ///
    /// The rounded constant shared by every table on the page, which is
    /// what table widths are checked against.
    pub fn printable_width(&self) -> u32 {
        match self.orientation {
            Orientation::Portrait => PORTRAIT_WIDTH,
            Orientation::Landscape => LANDSCAPE_WIDTH,
        }
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::portrait()
    }
}

/// A content block in the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A page break marker
    PageBreak,
}

impl Block {
    /// Get plain text of the block, if it has any.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Paragraph(p) => Some(p.plain_text()),
            Block::Table(t) => Some(t.plain_text()),
            Block::PageBreak => None,
        }
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Block::PageBreak)
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

impl From<Table> for Block {
    fn from(t: Table) -> Self {
        Block::Table(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_setups() {
        let portrait = PageSetup::portrait();
        assert!(!portrait.is_landscape());
        assert_eq!(portrait.margins.top, 1134);
        assert_eq!(portrait.margins.right, 567);
        assert_eq!(portrait.printable_width(), 10200);

        let landscape = PageSetup::landscape();
        assert!(landscape.is_landscape());
        assert!(landscape.width > landscape.height);
        assert_eq!(landscape.margins.top, 850);
        assert_eq!(landscape.printable_width(), 15100);
    }

    #[test]
    fn test_printable_width_fits_between_margins() {
        for page in [PageSetup::portrait(), PageSetup::landscape()] {
            let available = page.width - page.margins.left - page.margins.right;
            assert!(page.printable_width() <= available);
        }
    }
}
