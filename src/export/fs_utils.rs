// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - The file does NOT exist → Ok
/// - It exists and `force` is enabled → Ok
/// - It exists and `force == false` → refuse (batch tool, no prompt).
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::ExportRefused(path.display().to_string()))
}
