//! Unified application error type.
//! Engine, storage, CLI and export code all return AppError so the
//! handling stays consistent from the collaborators up to main().

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hour value: {0}")]
    InvalidHours(String),

    #[error("Invalid project id: {0:?}")]
    InvalidProject(String),

    #[error("Invalid day cell index: {0} (expected 0..=6)")]
    InvalidCell(usize),

    // ---------------------------
    // Block logic errors
    // ---------------------------
    #[error("No block found for project {project} on {date}")]
    NoBlockAt { project: String, date: NaiveDate },

    #[error("Expected {expected} values for the block, got {got}")]
    ValueCountMismatch { expected: usize, got: usize },

    #[error("Block editor is not open")]
    EditorClosed,

    // ---------------------------
    // Collaborator (hour storage) errors
    // ---------------------------
    #[error("Write failed for {project} on {date}: {reason}")]
    Write {
        project: String,
        date: NaiveDate,
        reason: String,
    },

    /// One entry per failed date with the store's reason.
    #[error("Commit incomplete: writes failed for {}", join_failures(.failed))]
    PartialCommit { failed: Vec<(NaiveDate, String)> },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

fn join_failures(failed: &[(NaiveDate, String)]) -> String {
    failed
        .iter()
        .map(|(d, reason)| format!("{} ({})", d.format("%Y-%m-%d"), reason))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type AppResult<T> = Result<T, AppError>;
