//! Error types for Branchline operations.
//!
//! The layout engine itself never fails; these errors come from the layers
//! around it: reading sheet documents and resolving configuration.

use std::io;

use thiserror::Error;

/// The main error type for Branchline operations.
#[derive(Debug, Error)]
pub enum BranchlineError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sheet error: {0}")]
    Sheet(String),
}
