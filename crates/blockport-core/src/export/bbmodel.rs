//! `.bbmodel` file writing
//!
//! The document model already matches the target nesting, so writing is
//! pure textual encoding: pretty-printed UTF-8 JSON.

use crate::Result;
use crate::document::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a document to a `.bbmodel` file
pub fn write_bbmodel(document: &Document, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        elements = document.elements.len(),
        "wrote bbmodel"
    );
    Ok(())
}

/// Encode a document as a pretty-printed JSON string
pub fn to_json_string(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Default model name for an output path: the file stem, like the host
/// exporter names models after the file being written
pub fn model_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("model")
        .to_string()
}
