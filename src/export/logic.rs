// src/export/logic.rs

use crate::core::stats::summarize;
use crate::db::pool::DbPool;
use crate::db::queries::load_entries;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::json::export_json;
use crate::export::model::EntryExport;
use crate::export::pdf::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::locale::Language;
use crate::ui::messages::warning;
use crate::utils::date::{period_bounds, today};
use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the user's entries.
    ///
    /// - `period`: `None`, `"all"`, or `YYYY` / `YYYY-MM` / `YYYY-MM-DD`
    /// - `file`: output path; defaults to `work-entries-YYYY-MM.<ext>` in
    ///   the current directory
    pub fn export(
        pool: &mut DbPool,
        user_id: i64,
        lang: Language,
        currency: &str,
        format: ExportFormat,
        file: Option<&str>,
        period: &Option<String>,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(default_file_name(&format)),
        };

        let bounds: Option<(NaiveDate, NaiveDate)> = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(period_bounds(p)?),
        };

        let entries = load_entries(pool, user_id, bounds)?;

        if entries.is_empty() {
            warning("No work entries found for the selected period.");
        }

        let rows: Vec<EntryExport> = entries
            .iter()
            .map(|e| EntryExport::from_entry(e, lang))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path, lang)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path, lang)?,
            ExportFormat::Pdf => {
                let summary = summarize(&entries);
                let title = pdf_title(&entries);
                export_pdf(&rows, &summary, &title, currency, &path)?;
            }
        }

        Ok(path)
    }
}

fn default_file_name(format: &ExportFormat) -> String {
    format!(
        "work-entries-{}.{}",
        today().format("%Y-%m"),
        format.as_str()
    )
}

/// Timesheet title carries the year of the exported entries.
fn pdf_title(entries: &[crate::models::work_entry::WorkEntry]) -> String {
    let year = entries
        .first()
        .map(|e| e.date.year())
        .unwrap_or_else(|| today().year());
    format!("VÝKAZ PRÁCE {}", year)
}
