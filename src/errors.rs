//! Unified application error type.
//! All modules (config, data, core, ui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed while waiting for an answer")]
    InputClosed,

    // ---------------------------
    // Dataset errors
    // ---------------------------
    #[error("Data for {city} is unavailable: cannot read {}", path.display())]
    DataUnavailable { city: String, path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Errors caused by the content of a city file. They end the current
    /// session iteration but not the program.
    pub fn is_dataset_error(&self) -> bool {
        matches!(
            self,
            AppError::DataUnavailable { .. } | AppError::Csv(_) | AppError::MalformedDataset(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
