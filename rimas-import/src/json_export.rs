//! JSON output for converted records.

use std::path::Path;

use rimas_catalog::RhymeRecord;

use crate::error::ImportError;

/// Write records as a pretty-printed UTF-8 JSON array.
///
/// Non-ASCII characters are written literally, not escaped. Parent
/// directories are created if needed. Returns the number of bytes
/// written, for the completion report.
pub fn write_records(path: &Path, records: &[RhymeRecord]) -> Result<u64, ImportError> {
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &json)?;

    Ok(json.len() as u64)
}
