//! JSON fixture file handling
//!
//! Fixtures are written in one pass with serde_json: indented with two spaces
//! (the layout the frontend's checked-in mock uses) or on a single line. The
//! target file is created or truncated; a failed write may leave it partial.

use crate::stats::Document;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serialize a document to a writer
pub fn write_document_to<W: Write>(writer: W, doc: &Document, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, doc)?;
    } else {
        serde_json::to_writer(writer, doc)?;
    }

    Ok(())
}

/// Write a document to `path`, overwriting any existing file
pub fn write_document(path: &Path, doc: &Document, pretty: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create fixture file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_document_to(&mut writer, doc, pretty)
        .with_context(|| format!("Failed to write fixture file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush fixture file: {}", path.display()))?;

    Ok(())
}

/// Read a fixture back from `path`
pub fn read_document(path: &Path) -> Result<Document> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open fixture file: {}", path.display()))?;

    let doc = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse fixture file: {}", path.display()))?;

    Ok(doc)
}
