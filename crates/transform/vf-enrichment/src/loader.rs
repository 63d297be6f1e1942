//! YAML loading for vendor mapping documents.

use crate::{RangeTable, VendorRecord};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};
use vf_error::{LoadError, Result};

/// Loads a RangeTable from a YAML mapping document on disk.
///
/// The document is a sequence of `{low, high, name}` records. Records that
/// cannot be converted are skipped and counted; see [`parse_vendor_table`].
pub fn load_vendor_table(path: impl AsRef<Path>) -> Result<RangeTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    parse_vendor_table(&content, &path.display().to_string())
}

/// Async variant of [`load_vendor_table`] for pipelines running on tokio.
pub async fn load_vendor_table_async(path: impl AsRef<Path>) -> Result<RangeTable> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| read_error(path, e))?;
    parse_vendor_table(&content, &path.display().to_string())
}

/// Parses a YAML mapping document into a RangeTable.
///
/// An empty document yields an empty table. A document that is not a
/// sequence is a [`LoadError::Parse`]. Within the sequence, any record that
/// lacks `low`, `high` or `name`, has a boundary that does not convert, or
/// has `low > high` is skipped.
pub fn parse_vendor_table(content: &str, source: &str) -> Result<RangeTable> {
    let mut table = RangeTable::new();

    if content.trim().is_empty() {
        info!(source = %source, "Vendor mapping document is empty");
        return Ok(table);
    }

    let documents: Vec<serde_yaml::Value> = serde_yaml::from_str(content)
        .map_err(|e| LoadError::Parse(format!("{source}: expected a sequence of records: {e}")))?;

    let mut errors = 0;

    for (index, document) in documents.into_iter().enumerate() {
        let outcome = serde_yaml::from_value::<VendorRecord>(document)
            .map_err(|e| e.to_string())
            .and_then(|record| table.insert(&record));

        if let Err(e) = outcome {
            debug!(
                record = index + 1,
                error = %e,
                "Skipping invalid vendor range"
            );
            errors += 1;
        }
    }

    let overlaps = table.overlapping_pairs().len();
    if overlaps > 0 {
        warn!(
            source = %source,
            overlaps = overlaps,
            "Vendor table has overlapping ranges; earliest entry wins"
        );
    }

    info!(
        source = %source,
        entries = table.len(),
        errors = errors,
        "Loaded vendor table"
    );

    Ok(table)
}

fn read_error(path: &Path, e: std::io::Error) -> vf_error::VfError {
    match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()).into(),
        _ => LoadError::Io(format!("Failed to read {}: {}", path.display(), e)).into(),
    }
}
