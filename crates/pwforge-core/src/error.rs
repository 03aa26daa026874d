//! Error types for pwforge-core

use thiserror::Error;

/// Result type alias for hashing operations
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Hashing pipeline error types
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("memory exponent out of range")]
    MemoryExponent,

    #[error("m_cost overflow")]
    MemoryOverflow,

    #[error("iteration count out of range")]
    TimeCost,

    #[error("parallelism out of range")]
    Parallelism,

    #[error("hashing failed: {0}")]
    Hash(String),

    #[error("verification failed: {0}")]
    Verify(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
