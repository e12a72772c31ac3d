//! Recurring structural blocks.
//!
//! Every builder here is a pure function of its inputs. Fragments come back
//! as paragraphs or tables; the composers decide the order.

use super::ComposeOptions;
use crate::content::{Document, DocumentKind};
use crate::error::Result;
use crate::layout::format::{long_date, short_datetime, upper, upper_first};
use crate::layout::{body_lines, style_of, Element, TableSpec, HALF_COLUMNS, PORTRAIT_WIDTH};
use crate::model::{
    Block, BorderStyle, Paragraph, Table, TableCell, TableRow, VerticalAlignment,
};
use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;

/// Name of the state.
pub const NATIONAL_NAME: &str = "CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM";
/// National motto.
pub const MOTTO: &str = "Độc lập - Tự do - Hạnh phúc";
/// Short rule drawn under the motto.
pub const HEADING_RULE: &str = "───────────────";
/// Printed under the signer title.
pub const SIGN_INSTRUCTION: &str = "(Ký, ghi rõ họ tên và đóng dấu)";
/// Default recipient lines.
pub const FALLBACK_RECIPIENTS: [&str; 2] = ["- Như trên;", "- Lưu: VT."];

/// Administrative-unit keywords the issuer name is split at.
const UNIT_KEYWORDS: [&str; 10] = [
    " XÃ ",
    " HUYỆN ",
    " TỈNH ",
    " THÀNH PHỐ ",
    " TP. ",
    " TP ",
    " THỊ XÃ ",
    " THỊ TRẤN ",
    " PHƯỜNG ",
    " QUẬN ",
];

/// Parent and subordinate lines of an issuing body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgIdentity {
    /// Upper line, the parent organization
    pub parent: String,
    /// Lower, underlined line
    pub sub: String,
}

impl OrgIdentity {
    /// Split an issuer name at its first administrative-unit keyword.
    ///
    /// `"Ủy ban nhân dân xã Gia Kiệm"` gives `ỦY BAN NHÂN DÂN` over
    /// `XÃ GIA KIỆM`. Without a keyword both lines carry the whole name.
    pub fn split(issuer: &str) -> Self {
        let composed: String = issuer.nfc().collect();
        let name = upper(&composed);
        if name.is_empty() {
            return Self {
                parent: "[CƠ QUAN CẤP TRÊN]".to_string(),
                sub: "[TÊN ĐƠN VỊ]".to_string(),
            };
        }

        // earliest keyword wins, the longer one on a tie (" THỊ XÃ " over " XÃ ")
        let split_at = UNIT_KEYWORDS
            .iter()
            .filter_map(|k| name.find(k).filter(|&i| i > 0).map(|i| (i, k.len())))
            .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
            .map(|(i, _)| i);

        match split_at {
            Some(i) => Self {
                parent: name[..i].trim().to_string(),
                sub: name[i..].trim().to_string(),
            },
            None => Self {
                parent: name.clone(),
                sub: name,
            },
        }
    }

    /// Identity paragraphs. With `collapse`, a name that did not split is
    /// printed once, underlined.
    pub fn paragraphs(&self, collapse: bool) -> Vec<Paragraph> {
        let sub = style_of(Element::SubOrg).paragraph(self.sub.as_str());
        if collapse && self.parent == self.sub {
            return vec![sub];
        }
        vec![style_of(Element::ParentOrg).paragraph(self.parent.as_str()), sub]
    }
}

/// National name, motto and rule.
pub fn national_heading() -> Vec<Paragraph> {
    vec![
        style_of(Element::NationalName).paragraph(NATIONAL_NAME),
        style_of(Element::Motto).paragraph(MOTTO),
        style_of(Element::HeadingRule).paragraph(HEADING_RULE),
    ]
}

/// Two-column borderless header: issuer identity left, national heading right.
pub fn document_header(issuer: &str) -> Result<Table> {
    let identity = OrgIdentity::split(issuer).paragraphs(false);
    two_column(identity, national_heading())
}

/// A borderless half-and-half table with one row.
pub fn two_column(left: Vec<Paragraph>, right: Vec<Paragraph>) -> Result<Table> {
    let spec = TableSpec::new(PORTRAIT_WIDTH, &HALF_COLUMNS)?.with_borders(BorderStyle::None);
    let row = TableRow::new(vec![
        TableCell::with_content(left).aligned(VerticalAlignment::Top),
        TableCell::with_content(right).aligned(VerticalAlignment::Top),
    ]);
    spec.table(vec![row])
}

/// `ngày 05 tháng 03 năm 2024`, or a fill-in line without a date.
pub fn date_phrase(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => long_date(date),
        None => "ngày ... tháng ... năm ...".to_string(),
    }
}

/// `Số: 12/QĐ-UBND<tab>Ngày 05 tháng 03 năm 2024`.
pub fn number_date_line(doc: &Document) -> Paragraph {
    let style = style_of(Element::NumberDate);
    let number = non_blank(&doc.number).unwrap_or("[Số]");

    let mut p = style.paragraph(format!("Số: {number}"));
    p.style.right_tab = Some(PORTRAIT_WIDTH);
    p.add_tab();
    p.add_run(style.run(upper_first(&date_phrase(doc.issue_date))));
    p
}

/// Fixed upper-case kind label.
pub fn kind_label(kind: DocumentKind) -> Paragraph {
    style_of(Element::KindLabel).paragraph(kind.label())
}

/// Subject line, falling back to the title.
pub fn subject_line(doc: &Document) -> Paragraph {
    let text = doc.subject_or_title().unwrap_or("[Trích yếu nội dung]");
    style_of(Element::Subject).paragraph(text)
}

/// `CHỦ TỊCH ỦY BAN NHÂN DÂN ...`; `None` without title and issuer.
pub fn authority_line(doc: &Document) -> Option<Paragraph> {
    let parts: Vec<String> = [&doc.signing_title, &doc.issuer]
        .into_iter()
        .filter_map(|s| non_blank(s))
        .map(upper)
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(style_of(Element::AuthorityLine).paragraph(parts.join(" ")))
}

/// `Kính gửi: ...` addressed to every recipient except filing copies.
pub fn salutation(recipients: &[String]) -> Paragraph {
    let addressees: Vec<&str> = recipients
        .iter()
        .map(|r| clean_recipient(r))
        .filter(|r| !r.is_empty() && !r.starts_with("Lưu"))
        .collect();
    let text = if addressees.is_empty() {
        "[Tên cơ quan nhận]".to_string()
    } else {
        addressees.join("; ")
    };
    style_of(Element::Salutation).paragraph(format!("Kính gửi: {text}"))
}

fn clean_recipient(recipient: &str) -> &str {
    let r = recipient.trim();
    let r = r.strip_prefix('-').unwrap_or(r).trim_start();
    r.trim_end_matches([';', ',', '.']).trim_end()
}

/// Legal bases between two spacers, each prefixed with `Căn cứ ` as needed.
pub fn legal_basis(bases: &[String]) -> Vec<Block> {
    let style = style_of(Element::LegalBasis);
    let mut blocks = vec![spacer().into()];
    for basis in bases.iter().filter_map(|b| non_blank(b)) {
        let lower = basis.to_lowercase();
        let text = if lower.starts_with("căn cứ") || lower.starts_with("theo") {
            basis.to_string()
        } else {
            format!("Căn cứ {basis}")
        };
        blocks.push(style.paragraph(text).into());
    }
    blocks.push(spacer().into());
    blocks
}

/// `QUYẾT ĐỊNH:` and the like, for decision kinds.
pub fn decision_label(kind: DocumentKind) -> Option<Paragraph> {
    kind.decision_label()
        .map(|label| style_of(Element::DecisionLabel).paragraph(label))
}

/// Classified body lines; `placeholder` stands in for blank text.
pub fn body(text: &str, placeholder: Option<&str>) -> Vec<Block> {
    let text = match (text.trim().is_empty(), placeholder) {
        (true, Some(placeholder)) => placeholder,
        (true, None) => return Vec::new(),
        (false, _) => text,
    };
    body_lines(text)
        .map(|line| line.into_paragraph().into())
        .collect()
}

/// Free text as plain indented lines, blank lines kept as spacers.
pub fn text_lines(text: &str) -> Vec<Block> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.lines()
        .map(|line| match non_blank(line) {
            Some(line) => text_line(line).into(),
            None => spacer().into(),
        })
        .collect()
}

/// `Nơi nhận:` and the recipient lines, or the two fallback lines.
pub fn recipient_column(recipients: &[String]) -> Vec<Paragraph> {
    let style = style_of(Element::Recipient);
    let mut column = vec![style_of(Element::RecipientsLabel).paragraph("Nơi nhận:")];
    let listed: Vec<&str> = recipients.iter().filter_map(|r| non_blank(r)).collect();
    if listed.is_empty() {
        column.extend(FALLBACK_RECIPIENTS.iter().map(|r| style.paragraph(*r)));
    } else {
        column.extend(listed.into_iter().map(|r| style.paragraph(r)));
    }
    column
}

/// Right-hand signature column of a document.
pub fn signer_column(doc: &Document, spacers: usize) -> Vec<Paragraph> {
    let location = non_blank(&doc.location).unwrap_or("...");
    let mut column = vec![style_of(Element::PlaceDate)
        .paragraph(format!("{location}, {}", date_phrase(doc.issue_date)))];
    if let Some(qualifier) = non_blank(&doc.signing_authority) {
        column.push(style_of(Element::SignerQualifier).paragraph(upper(qualifier)));
    }
    let title = non_blank(&doc.signing_title)
        .map(upper)
        .unwrap_or_else(|| "[CHỨC DANH]".to_string());
    column.push(style_of(Element::SignerTitle).paragraph(title));
    column.push(style_of(Element::SignInstruction).paragraph(SIGN_INSTRUCTION));
    column.extend(spacers_n(spacers));
    column.push(
        style_of(Element::SignerName).paragraph(non_blank(&doc.signed_by).unwrap_or("[Họ tên người ký]")),
    );
    column
}

/// A signing slot: title, spacers, name.
pub fn signing_slot(title: &str, name: &str, spacers: usize) -> Vec<Paragraph> {
    let mut slot = vec![style_of(Element::SignerTitle).paragraph(upper(title))];
    slot.extend(spacers_n(spacers));
    slot.push(style_of(Element::SignerName).paragraph(name.trim()));
    slot
}

/// Recipient list beside the signature of a document. Documents that do
/// not list recipients leave the left column empty.
pub fn signature_block(doc: &Document, options: &ComposeOptions) -> Result<Table> {
    let left = if doc.lists_recipients() {
        recipient_column(&doc.recipients)
    } else {
        Vec::new()
    };
    two_column(left, signer_column(doc, options.signature_spacers))
}

/// A blank line in body size.
pub fn spacer() -> Paragraph {
    style_of(Element::Spacer).paragraph("")
}

fn spacers_n(count: usize) -> impl Iterator<Item = Paragraph> {
    std::iter::repeat_with(spacer).take(count)
}

/// Numbered section title, e.g. `I. THÀNH PHẦN THAM DỰ`.
pub fn section_title(text: impl Into<String>) -> Paragraph {
    style_of(Element::SectionTitle).paragraph(text)
}

/// Bold lead-in line.
pub fn label(text: impl Into<String>) -> Paragraph {
    style_of(Element::Label).paragraph(text)
}

/// Plain indented line.
pub fn text_line(text: impl Into<String>) -> Paragraph {
    style_of(Element::BodyText).paragraph(text)
}

/// Rule and export footer.
pub fn footer(options: &ComposeOptions) -> Vec<Block> {
    let mut rule = style_of(Element::FooterRule).paragraph("");
    rule.style.top_rule = true;

    let product = format!("Phần mềm: {}", options.product_name);
    let text = match &options.export_stamp {
        Some(stamp) => format!(
            "Ngày xuất: {}  —  Người xuất: {}  —  {}",
            short_datetime(stamp.exported_at),
            stamp.exported_by,
            product
        ),
        None => product,
    };
    vec![rule.into(), style_of(Element::Footer).paragraph(text).into()]
}

/// Trimmed text, `None` when blank.
pub(crate) fn non_blank(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}
