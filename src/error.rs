//! Error types for Libris

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// No registered borrower matches the given email.
    #[error("invalid email")]
    UnknownBorrower,

    /// No matching title where the operation looked for one: the available
    /// list for borrows, the borrower's own list for returns.
    #[error("invalid book title")]
    UnknownTitle,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot format error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    SnapshotVersion(u32),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
