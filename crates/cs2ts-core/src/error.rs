//! Error types for code generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for code generation operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for code generation operations.
///
/// Only environment and configuration failures surface here. Malformed
/// declarations, unknown type references and malformed generic argument lists
/// are absorbed by the parser and resolver.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A source file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The marker annotation could not be compiled into a search pattern
    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration rejected by validation
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}
