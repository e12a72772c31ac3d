//! Rendering options and configuration.

use super::JsonFormat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Serialized form of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Flat-OPC WordprocessingML package
    #[default]
    WordXml,
    /// The render tree as JSON
    Json,
    /// Plain-text preview
    Text,
}

impl OutputFormat {
    /// File extension conventionally used for the format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::WordXml => "xml",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xml" | "word" | "wordml" | "docx-xml" => Ok(OutputFormat::WordXml),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Options for serializing a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,

    /// JSON layout, used when `format` is [`OutputFormat::Json`]
    pub json: JsonFormat,

    /// Mark page breaks in the text preview
    pub mark_page_breaks: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the JSON layout.
    pub fn with_json(mut self, json: JsonFormat) -> Self {
        self.json = json;
        self
    }

    /// Enable or disable page break markers in the text preview.
    pub fn with_page_break_marks(mut self, mark: bool) -> Self {
        self.mark_page_breaks = mark;
        self
    }
}
