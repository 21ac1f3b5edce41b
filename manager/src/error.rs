//! Error types for town-graph-manager.

use std::path::PathBuf;

use thiserror::Error;
use town_graph_core::GraphError;

/// Result type alias for manager operations.
pub type Result<T> = std::result::Result<T, ManagerError>;

/// Errors from the manager, the road-file import and settings loading.
#[derive(Error, Debug)]
pub enum ManagerError {
    /// A graph query referenced a town that isn't loaded.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A road file line could not be imported.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Loaded graph exceeds the configured town cap.
    #[error("loaded graph has {count} towns, exceeds max_towns={max}")]
    TooManyTowns {
        /// Towns in the graph after import.
        count: usize,
        /// Configured limit.
        max: usize,
    },

    /// Settings file is unreadable or holds an out-of-range value.
    #[error("invalid settings in {path}: {message}")]
    Settings {
        /// Settings file that failed.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// IO error reading a road or settings file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A road file line that has the right shape but bad contents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("line {line}: road weight '{value}' is not a non-negative integer")]
    InvalidWeight { line: usize, value: String },
}
