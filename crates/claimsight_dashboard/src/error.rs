//! Error types for claimsight_dashboard

use thiserror::Error;

/// Errors that can occur while building the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Failed to parse the data snapshot
    #[error("snapshot parsing failed: {0}")]
    SnapshotParse(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for DashboardError {
    fn from(err: anyhow::Error) -> Self {
        DashboardError::Other(err.to_string())
    }
}

/// Result type for claimsight_dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
