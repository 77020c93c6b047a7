//! Error types for fepost operations.

use thiserror::Error;

/// Result type alias using the fepost Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during post-processing operations.
///
/// All of these are caller defects, not transient conditions: a transform
/// either succeeds deterministically or fails immediately.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input: empty container, wrong field location, or
    /// inconsistent field data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No mesh geometry available, neither as the field's support nor as an
    /// explicit argument.
    #[error("missing support: {0}")]
    MissingSupport(String),

    /// Label spaces of two containers do not align.
    #[error("label mismatch: {0}")]
    LabelMismatch(String),

    /// An element cannot be classified as solid or shell.
    #[error("unknown element shape: {0}")]
    UnknownElementShape(String),

    /// Mesh construction errors.
    #[error("mesh error: {0}")]
    Mesh(String),
}
