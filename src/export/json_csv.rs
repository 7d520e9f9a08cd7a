// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, ShiftExport};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render rows as CSV text. Fields holding a comma, quote or line break are
/// quoted with doubled inner quotes; records end with `\n`.
pub fn render_csv(rows: &[ShiftExport]) -> AppResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADERS)?;
    for item in rows {
        wtr.serialize(item)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

pub fn render_json(rows: &[ShiftExport]) -> AppResult<String> {
    serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));
    write_file(path, &render_json(rows)?)?;
    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with header row.
pub(crate) fn export_csv(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));
    write_file(path, &render_csv(rows)?)?;
    notify_export_success("CSV", path);
    Ok(())
}
