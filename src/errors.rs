//! Unified application error type.
//! All modules (core, cli, config, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Log file not found: {0}")]
    FileNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Error reading log file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Export refused: '{0}' already exists (use --force to overwrite)")]
    ExportRefused(String),
}

pub type AppResult<T> = Result<T, AppError>;
