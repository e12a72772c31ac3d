//! Composition options.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Product name printed in report footers by default.
pub const DEFAULT_PRODUCT_NAME: &str = "vanban";

/// Blank lines left for a handwritten signature.
pub const DEFAULT_SIGNATURE_SPACERS: usize = 3;

/// Options for composing documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    /// Product name shown in report footers and package metadata
    pub product_name: String,

    /// Export time and user; `None` keeps output independent of the clock
    pub export_stamp: Option<ExportStamp>,

    /// Blank lines between the signing instruction and the signer name
    pub signature_spacers: usize,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product name.
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Stamp the output with an export time and user.
    pub fn with_export_stamp(mut self, at: NaiveDateTime, by: impl Into<String>) -> Self {
        self.export_stamp = Some(ExportStamp {
            exported_at: at,
            exported_by: by.into(),
        });
        self
    }

    /// Set the number of signature spacer lines.
    pub fn with_signature_spacers(mut self, count: usize) -> Self {
        self.signature_spacers = count;
        self
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            export_stamp: None,
            signature_spacers: DEFAULT_SIGNATURE_SPACERS,
        }
    }
}

/// Who exported a document, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStamp {
    /// Export time
    pub exported_at: NaiveDateTime,
    /// Exporting user
    pub exported_by: String,
}
