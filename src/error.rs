//! Error taxonomy for skill document ingestion.
//!
//! Only document-level faults are typed: a malformed document is fatal to
//! that single file and logged-and-skipped during catalog load. A missing
//! catalog root and an unavailable reasoning service are degraded states,
//! not errors, and never reach callers.

use thiserror::Error;

/// Failure to turn a raw document into a `Skill`.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The front block is missing or unterminated. No partial metadata is
    /// returned.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The document could not be read off disk.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}
