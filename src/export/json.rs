use super::model::JobExport;
use crate::errors::{AppError, AppResult};
use std::fs;

/// Write the job rows as pretty-printed JSON to the given file.
pub fn write_json(path: &str, rows: &[JobExport]) -> AppResult<()> {
    let body = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    fs::write(path, body)?;
    Ok(())
}
