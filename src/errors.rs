//! Unified application error type.
//! Every module (db, core, cli, export) returns AppError so that failures
//! reach the user through a single path with the prior state intact.

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid break type: {0}")]
    InvalidBreakKind(String),

    #[error("Invalid break minutes: {0}")]
    InvalidMinutes(String),

    #[error("End time {end} is before start time {start}")]
    EndBeforeStart { start: String, end: String },

    // ---------------------------
    // State precondition errors
    // ---------------------------
    #[error("A break is already running for shift {0}")]
    BreakAlreadyRunning(String),

    #[error("No running break found for shift {0}")]
    NoRunningBreak(String),

    #[error("End the running break of shift {0} first")]
    BreakStillRunning(String),

    #[error("Shift {0} has already ended")]
    ShiftAlreadyEnded(String),

    #[error("Shift {0} is still active")]
    ShiftStillActive(String),

    #[error("Shift not found: {0}")]
    ShiftNotFound(String),

    #[error("Invalid break index: {0}")]
    InvalidBreakIndex(usize),

    #[error("Break outside shift {0}: {1}")]
    BreakOutsideShift(String, String),

    #[error("Shift id '{0}' is ambiguous; type more characters")]
    AmbiguousShiftId(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
