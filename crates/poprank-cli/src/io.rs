//! Loader, writer and clock around the aggregation core.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use poprank_common::{AggregateOutput, InputDocument, PoprankError, Result};
use tracing::debug;

/// Read and parse the input document. Any I/O or shape error is fatal.
pub async fn load_document(path: &Path) -> Result<InputDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| PoprankError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "input read");
    InputDocument::from_slice(&bytes).map_err(|e| PoprankError::parse(path, e))
}

/// Serialize the snapshot and write it, creating parent directories.
pub async fn write_snapshot(path: &Path, output: &AggregateOutput, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| PoprankError::io(parent, e))?;
    }

    let bytes = if pretty {
        serde_json::to_vec_pretty(output)?
    } else {
        serde_json::to_vec(output)?
    };
    tokio::fs::write(path, &bytes)
        .await
        .map_err(|e| PoprankError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "snapshot written");
    Ok(())
}

/// `updatedAt` stamp: UTC, millisecond precision, `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
