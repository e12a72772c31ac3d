//! Rendering module for serializing composed documents.
//!
//! Three formats are supported: a Flat-OPC WordprocessingML package, the
//! render tree as JSON and a plain-text preview. The sinks below serialize
//! the whole document in memory and then write it in one pass.

mod json;
mod options;
mod result;
mod text;
mod wordml;

pub use json::{to_json, JsonFormat};
pub use options::{OutputFormat, RenderOptions};
pub use result::{RenderResult, RenderStats};
pub use text::{to_text, PAGE_BREAK_MARKER};
pub use wordml::{escape_xml, to_wordml, to_wordml_with_stats, WordMlRenderer};

use crate::error::Result;
use crate::model::RenderedDocument;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize a document in the format the options select.
pub fn render_to_string(doc: &RenderedDocument, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::WordXml => to_wordml(doc),
        OutputFormat::Json => to_json(doc, options.json),
        OutputFormat::Text => to_text(doc, options),
    }
}

/// Serialize a document and write it to a sink.
///
/// Write failures surface as [`crate::Error::Render`].
pub fn write_to<W: Write>(
    doc: &RenderedDocument,
    mut writer: W,
    options: &RenderOptions,
) -> Result<()> {
    let content = render_to_string(doc, options)?;
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Serialize a document and write it to a file, replacing any existing one.
pub fn write_to_path<P: AsRef<Path>>(
    doc: &RenderedDocument,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    let content = render_to_string(doc, options)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Asynchronous variant of [`write_to_path`].
#[cfg(feature = "async")]
pub async fn write_to_path_async<P: AsRef<Path>>(
    doc: &RenderedDocument,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let path = path.as_ref();
    let content = render_to_string(doc, options)?;
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
