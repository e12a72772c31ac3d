//! Single and batch document recipes.

use super::blocks::{
    authority_line, body, decision_label, document_header, kind_label, legal_basis,
    number_date_line, salutation, signature_block, spacer, subject_line,
};
use super::ComposeOptions;
use crate::content::Document;
use crate::error::Result;
use crate::model::Block;

/// Placeholder for a document without body text.
pub const BODY_PLACEHOLDER: &str = "[Nội dung văn bản]";

/// Blocks of one administrative document.
pub fn single(doc: &Document, options: &ComposeOptions) -> Result<Vec<Block>> {
    let kind = doc.kind;
    let mut blocks: Vec<Block> = vec![
        document_header(&doc.issuer)?.into(),
        number_date_line(doc).into(),
        kind_label(kind).into(),
        subject_line(doc).into(),
    ];

    if kind.is_decision() {
        blocks.extend(authority_line(doc).map(Block::from));
    }
    if kind.is_correspondence() {
        blocks.push(salutation(&doc.recipients).into());
    }
    if doc.based_on.iter().any(|b| !b.trim().is_empty()) {
        blocks.extend(legal_basis(&doc.based_on));
    }
    if let Some(label) = decision_label(kind) {
        blocks.push(label.into());
    }

    blocks.extend(body(&doc.content, Some(BODY_PLACEHOLDER)));
    blocks.push(spacer().into());
    blocks.push(signature_block(doc, options)?.into());
    Ok(blocks)
}

/// Blocks of several documents, separated by page breaks.
pub fn batch(docs: &[Document], options: &ComposeOptions) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            blocks.push(Block::PageBreak);
        }
        blocks.extend(single(doc, options)?);
    }
    Ok(blocks)
}
