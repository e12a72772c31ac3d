//! Single administrative document content.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An administrative document as supplied by a producer.
///
/// Every field is optional in practice: empty strings and empty lists are
/// rendered as placeholders or omitted, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Document number, e.g. "15/QĐ-UBND"
    pub number: String,

    /// Title
    pub title: String,

    /// Subject line (trích yếu)
    pub subject: String,

    /// Body text, one logical line per `\n`
    pub content: String,

    /// Issuing body, e.g. "UBND XÃ GIA KIỂM"
    pub issuer: String,

    /// Printed name of the signer
    pub signed_by: String,

    /// Signer's title, e.g. "Chủ tịch"
    pub signing_title: String,

    /// Authority qualifier printed above the signer title, e.g. "TM. ỦY BAN NHÂN DÂN"
    pub signing_authority: String,

    /// Date of issue
    pub issue_date: Option<NaiveDate>,

    /// Place of issue
    pub location: String,

    /// Direction of the document
    pub direction: Direction,

    /// Document kind
    pub kind: DocumentKind,

    /// Legal bases in order
    pub based_on: Vec<String>,

    /// Recipients in order
    pub recipients: Vec<String>,
}

impl Document {
    /// Create an empty document of the given kind.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set the document number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the body text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the issuing body.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Set the signer name and title.
    pub fn with_signer(mut self, name: impl Into<String>, title: impl Into<String>) -> Self {
        self.signed_by = name.into();
        self.signing_title = title.into();
        self
    }

    /// Set the authority qualifier.
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.signing_authority = authority.into();
        self
    }

    /// Set the date of issue.
    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Set the place of issue.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Append a legal basis.
    pub fn with_basis(mut self, basis: impl Into<String>) -> Self {
        self.based_on.push(basis.into());
        self
    }

    /// Append a recipient.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipients.push(recipient.into());
        self
    }

    /// Whether the signature block carries a `Nơi nhận:` column.
    ///
    /// Outgoing, decision-kind and correspondence documents always do;
    /// other documents only when they list recipients.
    pub fn lists_recipients(&self) -> bool {
        self.direction == Direction::Outgoing
            || self.kind.is_decision()
            || self.kind.is_correspondence()
            || self.recipients.iter().any(|r| !r.trim().is_empty())
    }

    /// Subject line, falling back to the title.
    pub fn subject_or_title(&self) -> Option<&str> {
        [self.subject.as_str(), self.title.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

/// Direction of a document relative to the issuing office.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Outgoing (văn bản đi)
    #[default]
    Outgoing,
    /// Incoming (văn bản đến)
    Incoming,
    /// Internal (nội bộ)
    Internal,
}

/// Kind of administrative document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Luật
    Law,
    /// Nghị định
    Decree,
    /// Thông tư
    Circular,
    /// Nghị quyết
    Resolution,
    /// Quyết định
    Decision,
    /// Công văn
    OfficialLetter,
    /// Báo cáo
    Report,
    /// Tờ trình
    Proposal,
    /// Kế hoạch
    Plan,
    /// Thông báo
    Notice,
    /// Chỉ thị
    Directive,
    /// Hướng dẫn
    Guideline,
    /// Quy định
    Regulation,
    /// Any other kind
    #[default]
    Other,
}

impl DocumentKind {
    /// All kinds in declaration order.
    pub const ALL: [DocumentKind; 14] = [
        DocumentKind::Law,
        DocumentKind::Decree,
        DocumentKind::Circular,
        DocumentKind::Resolution,
        DocumentKind::Decision,
        DocumentKind::OfficialLetter,
        DocumentKind::Report,
        DocumentKind::Proposal,
        DocumentKind::Plan,
        DocumentKind::Notice,
        DocumentKind::Directive,
        DocumentKind::Guideline,
        DocumentKind::Regulation,
        DocumentKind::Other,
    ];

    /// Upper-case label printed under the number/date line.
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Law => "LUẬT",
            DocumentKind::Decree => "NGHỊ ĐỊNH",
            DocumentKind::Circular => "THÔNG TƯ",
            DocumentKind::Resolution => "NGHỊ QUYẾT",
            DocumentKind::Decision => "QUYẾT ĐỊNH",
            DocumentKind::OfficialLetter => "CÔNG VĂN",
            DocumentKind::Report => "BÁO CÁO",
            DocumentKind::Proposal => "TỜ TRÌNH",
            DocumentKind::Plan => "KẾ HOẠCH",
            DocumentKind::Notice => "THÔNG BÁO",
            DocumentKind::Directive => "CHỈ THỊ",
            DocumentKind::Guideline => "HƯỚNG DẪN",
            DocumentKind::Regulation => "QUY ĐỊNH",
            DocumentKind::Other => "VĂN BẢN",
        }
    }

    /// Whether documents of this kind carry an authority line and a decision label.
    pub fn is_decision(self) -> bool {
        matches!(
            self,
            DocumentKind::Decision
                | DocumentKind::Resolution
                | DocumentKind::Directive
                | DocumentKind::Decree
                | DocumentKind::Law
        )
    }

    /// Whether documents of this kind open with a salutation.
    pub fn is_correspondence(self) -> bool {
        self == DocumentKind::OfficialLetter
    }

    /// Label printed before the articles of a decision-kind document.
    pub fn decision_label(self) -> Option<&'static str> {
        match self {
            DocumentKind::Decision => Some("QUYẾT ĐỊNH:"),
            DocumentKind::Resolution => Some("NGHỊ QUYẾT:"),
            DocumentKind::Directive => Some("CHỈ THỊ:"),
            DocumentKind::Decree => Some("NGHỊ ĐỊNH:"),
            DocumentKind::Law => Some("LUẬT:"),
            _ => None,
        }
    }
}
