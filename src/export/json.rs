use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, notify_export_success};
use std::path::Path;

/// Write the entries as pretty-printed JSON.
pub(crate) fn export_json(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
