use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::tree::Envelope;

/// Errors that can occur while rendering an [`Envelope`] to JSON.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize the declaration.
    #[error("failed to encode declaration: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to write output file.
    #[error("failed to write declaration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Output layout for [`write`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteStyle {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indented.
    Pretty,
}

/// Convert an [`Envelope`] into a JSON value with sorted object keys.
pub fn to_value(envelope: &Envelope) -> Result<Value, WriteError> {
    Ok(serde_json::to_value(envelope)?)
}

/// Serialize an [`Envelope`] into JSON bytes.
///
/// Keys are routed through [`to_value`] first so every object is emitted in
/// sorted key order regardless of how the model serializes its fields.
pub fn write(envelope: &Envelope, style: WriteStyle) -> Result<Vec<u8>, WriteError> {
    let value = to_value(envelope)?;
    let bytes = match style {
        WriteStyle::Compact => serde_json::to_vec(&value)?,
        WriteStyle::Pretty => serde_json::to_vec_pretty(&value)?,
    };
    Ok(bytes)
}

/// Serialize an [`Envelope`] and write it to `path` with a trailing newline.
pub fn write_file(envelope: &Envelope, style: WriteStyle, path: &Path) -> Result<(), WriteError> {
    let mut bytes = write(envelope, style)?;
    bytes.push(b'\n');
    fs::write(path, bytes)?;
    Ok(())
}
