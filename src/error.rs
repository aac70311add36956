//! Error types for the reconciliation engine

use thiserror::Error;

/// Main error type for reconciliation operations
#[derive(Error, Debug)]
pub enum ReconError {
    /// A row set is missing required columns for the role it was supplied as.
    /// The usual cause is mapping the wrong export table to a role.
    #[error("'{role}' table is missing required column(s): {}", .missing.join(", "))]
    Schema { role: String, missing: Vec<String> },

    #[error("Footing '{0}' has degenerate corner geometry: {1}")]
    DegenerateGeometry(String, String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconError>;
