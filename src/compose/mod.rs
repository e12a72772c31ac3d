//! Document composition.
//!
//! A [`Composer`] turns borrowed content objects into a [`RenderedDocument`]
//! for one of the closed set of [`Variant`]s. Composition is pure and
//! deterministic: the same input and options give the same tree.
//!
//! # Example
//!
//! ```
//! use vanban::compose::{Composer, ComposeOptions, Variant};
//! use vanban::content::{Document, DocumentKind};
//!
//! let doc = Document::new(DocumentKind::Decision)
//!     .with_issuer("Ủy ban nhân dân xã Gia Kiệm")
//!     .with_content("Điều 1. Ban hành kèm theo Quyết định này Quy chế làm việc.");
//!
//! let rendered = Composer::new(ComposeOptions::default())
//!     .compose(Variant::Single(&doc))
//!     .unwrap();
//! assert!(rendered.plain_text().contains("QUYẾT ĐỊNH:"));
//! ```

pub mod blocks;
mod document;
mod meeting;
mod options;

pub use document::BODY_PLACEHOLDER;
pub use options::{ComposeOptions, ExportStamp, DEFAULT_PRODUCT_NAME, DEFAULT_SIGNATURE_SPACERS};

use crate::content::{Document, Meeting};
use crate::error::Result;
use crate::model::{Metadata, PageSetup, RenderedDocument};
use serde::{Deserialize, Serialize};

/// The document to compose, borrowing its content.
#[derive(Debug, Clone, Copy)]
pub enum Variant<'a> {
    /// One administrative document
    Single(&'a Document),
    /// Several documents, one per page run
    Batch(&'a [Document]),
    /// Meeting minutes
    Minutes(&'a Meeting),
    /// Notice of meeting conclusions
    ConclusionNotice(&'a Meeting),
    /// Internal report of one meeting
    InternalReport(&'a Meeting),
    /// Landscape overview of several meetings
    Aggregate(&'a [Meeting]),
}

impl Variant<'_> {
    /// The variant tag without its content.
    pub fn kind(&self) -> VariantKind {
        match self {
            Variant::Single(_) => VariantKind::Single,
            Variant::Batch(_) => VariantKind::Batch,
            Variant::Minutes(_) => VariantKind::Minutes,
            Variant::ConclusionNotice(_) => VariantKind::ConclusionNotice,
            Variant::InternalReport(_) => VariantKind::InternalReport,
            Variant::Aggregate(_) => VariantKind::Aggregate,
        }
    }
}

/// Tag of a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    /// One administrative document
    Single,
    /// Several documents
    Batch,
    /// Meeting minutes
    Minutes,
    /// Notice of meeting conclusions
    ConclusionNotice,
    /// Internal meeting report
    InternalReport,
    /// Multi-meeting overview
    Aggregate,
}

impl VariantKind {
    /// Whether the variant is laid out on landscape pages.
    pub fn is_landscape(self) -> bool {
        matches!(self, VariantKind::Aggregate)
    }

    /// Short name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Single => "document",
            VariantKind::Batch => "batch",
            VariantKind::Minutes => "minutes",
            VariantKind::ConclusionNotice => "conclusion",
            VariantKind::InternalReport => "report",
            VariantKind::Aggregate => "aggregate",
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Composes content into render trees.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: ComposeOptions,
}

impl Composer {
    /// Create a composer with the given options.
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Compose one variant.
    ///
    /// Missing fields render as placeholders or omitted sections. The only
    /// failure is a table whose widths do not fit the page.
    pub fn compose(&self, variant: Variant<'_>) -> Result<RenderedDocument> {
        let kind = variant.kind();
        let page = if kind.is_landscape() {
            PageSetup::landscape()
        } else {
            PageSetup::portrait()
        };

        let blocks = match variant {
            Variant::Single(doc) => document::single(doc, &self.options)?,
            Variant::Batch(docs) => document::batch(docs, &self.options)?,
            Variant::Minutes(m) => meeting::minutes(m, &self.options)?,
            Variant::ConclusionNotice(m) => meeting::conclusion_notice(m, &self.options)?,
            Variant::InternalReport(m) => meeting::internal_report(m, &self.options)?,
            Variant::Aggregate(ms) => meeting::aggregate(ms, &self.options)?,
        };

        let mut rendered = RenderedDocument::new(page);
        rendered.metadata = self.metadata(&variant);
        rendered.extend(blocks);

        log::debug!(
            "composed {} document: {} blocks, {} page breaks",
            kind,
            rendered.blocks.len(),
            rendered.page_break_count()
        );
        Ok(rendered)
    }

    fn metadata(&self, variant: &Variant<'_>) -> Metadata {
        let title = match variant {
            Variant::Single(doc) => doc.subject_or_title().map(str::to_string),
            Variant::Batch(docs) => match docs {
                [only] => only.subject_or_title().map(str::to_string),
                _ => Some(format!("{} văn bản", docs.len())),
            },
            Variant::Minutes(m) => Some(format!("Biên bản - {}", m.title.trim())),
            Variant::ConclusionNotice(m) => Some(format!("Thông báo kết luận - {}", m.title.trim())),
            Variant::InternalReport(m) => Some(format!("Báo cáo tổng hợp - {}", m.title.trim())),
            Variant::Aggregate(_) => Some("Bảng tổng hợp các cuộc họp".to_string()),
        };
        let author = match variant {
            Variant::Single(doc) => blocks::non_blank(&doc.issuer).map(str::to_string),
            Variant::Minutes(m) | Variant::ConclusionNotice(m) | Variant::InternalReport(m) => {
                blocks::non_blank(&m.organizing_unit).map(str::to_string)
            }
            Variant::Batch(_) | Variant::Aggregate(_) => None,
        };
        let keywords = match variant {
            Variant::InternalReport(m) => m.tags.clone(),
            _ => Vec::new(),
        };

        Metadata {
            title,
            author,
            subject: None,
            keywords,
            creator: Some(self.options.product_name.clone()),
            created: self.options.export_stamp.as_ref().map(|s| s.exported_at),
        }
    }
}

/// Compose with default options.
pub fn compose(variant: Variant<'_>) -> Result<RenderedDocument> {
    Composer::default().compose(variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DocumentKind;
    use chrono::NaiveDate;

    #[test]
    fn test_page_follows_variant() {
        let doc = Document::new(DocumentKind::Notice);
        assert!(!compose(Variant::Single(&doc)).unwrap().page.is_landscape());
        assert!(compose(Variant::Aggregate(&[])).unwrap().page.is_landscape());
    }

    #[test]
    fn test_compose_is_deterministic() {
        let doc = Document::new(DocumentKind::Decision)
            .with_issuer("UBND huyện Thống Nhất")
            .with_content("Điều 1.\nĐiều 2.");
        let composer = Composer::default();
        assert_eq!(
            composer.compose(Variant::Single(&doc)).unwrap(),
            composer.compose(Variant::Single(&doc)).unwrap()
        );
    }

    #[test]
    fn test_metadata() {
        let doc = Document::new(DocumentKind::Report)
            .with_title("Báo cáo quý I")
            .with_issuer("Sở Tài chính");
        let rendered = compose(Variant::Single(&doc)).unwrap();
        assert_eq!(rendered.metadata.title.as_deref(), Some("Báo cáo quý I"));
        assert_eq!(rendered.metadata.author.as_deref(), Some("Sở Tài chính"));
        assert_eq!(rendered.metadata.creator.as_deref(), Some(DEFAULT_PRODUCT_NAME));
        assert!(rendered.metadata.created.is_none());

        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 0)
            .unwrap();
        let stamped = Composer::new(ComposeOptions::new().with_export_stamp(at, "admin"))
            .compose(Variant::Single(&doc))
            .unwrap();
        assert_eq!(stamped.metadata.created, Some(at));
    }

    #[test]
    fn test_variant_kind_names() {
        let docs = [Document::default(), Document::default()];
        assert_eq!(Variant::Batch(&docs).kind(), VariantKind::Batch);
        assert_eq!(VariantKind::ConclusionNotice.to_string(), "conclusion");
        assert!(!VariantKind::Minutes.is_landscape());
    }
}
