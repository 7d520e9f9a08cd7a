// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};

/// Check whether a file can be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm("Overwrite?") {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}

/// Resolve the output path: an explicit path must be absolute, otherwise
/// `Timesheets-<timestamp>.<ext>` in the current directory.
pub(crate) fn resolve_output(file: Option<&String>, format: ExportFormat) -> AppResult<PathBuf> {
    match file {
        Some(f) => {
            let path = expand_tilde(f);
            if !path.is_absolute() {
                return Err(AppError::from(io::Error::other(format!(
                    "Output file path must be absolute: {f}"
                ))));
            }
            Ok(path)
        }
        None => {
            let stamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
            let name = format!("Timesheets-{stamp}.{}", format.as_str());
            Ok(std::env::current_dir()?.join(name))
        }
    }
}
