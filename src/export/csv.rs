use crate::errors::{AppError, AppResult};
use crate::export::model::{entry_to_row, get_headers};
use crate::export::{EntryExport, notify_export_success};
use crate::locale::Language;
use csv::Writer;
use std::path::Path;

/// Write the entries as CSV with localized headers.
pub(crate) fn export_csv(entries: &[EntryExport], path: &Path, lang: Language) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(to_export_error)?;

    wtr.write_record(get_headers(lang)).map_err(to_export_error)?;

    for e in entries {
        wtr.write_record(entry_to_row(e)).map_err(to_export_error)?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

fn to_export_error(e: csv::Error) -> AppError {
    AppError::Export(e.to_string())
}
