// src/export/logic.rs

use crate::core::accounting::ShiftAccounting;
use crate::core::filter::ShiftFilter;
use crate::db::repository::ShiftRepository;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftExport;
use crate::export::range::parse_optional_range;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Rows for every completed shift matching the filter, ordered by start.
    pub fn rows<R: ShiftRepository>(
        acc: &ShiftAccounting<R>,
        filter: &ShiftFilter,
    ) -> AppResult<Vec<ShiftExport>> {
        Ok(acc
            .history(filter)?
            .iter()
            .map(ShiftExport::from_shift)
            .collect())
    }

    /// Export completed shifts.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path, or `None` for `Timesheets-<stamp>.<ext>`
    /// - `event`: case-insensitive event label filter
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `a:b` ranges
    ///
    /// The file is always written; with no matching shift a CSV holds only
    /// the header row and a JSON file an empty array.
    pub fn export<R: ShiftRepository>(
        acc: &mut ShiftAccounting<R>,
        format: ExportFormat,
        file: Option<&String>,
        event: Option<&String>,
        range: Option<&String>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_output(file, format)?;
        let bounds = parse_optional_range(range)?;
        let filter = ShiftFilter::new(event.map(|e| e.as_str()), bounds);

        let rows = Self::rows(acc, &filter)?;
        if rows.is_empty() {
            warning("No completed shifts found for the selected filter.");
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        if let Err(e) = acc.repository_mut().audit(
            "export",
            &path.to_string_lossy(),
            &format!("{} shift(s) exported as {}", rows.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(path)
    }
}
