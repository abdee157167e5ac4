//! Unified application error type.
//! All modules (db, core, cli, remote, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid watering interval: {0} (must be at least 1 day)")]
    InvalidInterval(i64),

    #[error("Invalid height: {0} (must be zero or positive)")]
    InvalidHeight(f64),

    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(f64),

    #[error("Invalid reminder delay: {0} minutes (must be positive)")]
    InvalidReminderDelay(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid log status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Plant not found: {0}")]
    PlantNotFound(i64),

    #[error("Log entry not found: {0}")]
    LogNotFound(i64),

    #[error("Expense not found: {0}")]
    ExpenseNotFound(i64),

    // ---------------------------
    // Remote services
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Weather data error: {0}")]
    Weather(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
