//! Error types for the loading and configuration surfaces
//!
//! The projection and solving routines never fail; non-finite inputs
//! propagate as NaN. Only file, CSV and JSON handling return these errors.

use std::path::PathBuf;

/// Errors raised while loading goals or solver configuration
#[derive(Debug, thiserror::Error)]
pub enum GoalFundingError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid goal record {goal_id}: {message}")]
    InvalidRecord { goal_id: u32, message: String },
}

pub type Result<T> = std::result::Result<T, GoalFundingError>;
