//! Error types for the animark client.
//!
//! This module defines the centralized error type [`AnimarkError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for animark operations.
///
/// This enum consolidates all error conditions that can occur while talking to
/// the remote catalog or the favorites store. Note that not every variant is
/// fatal to the caller: fetch failures become an explicit list status, storage
/// read corruption degrades to an empty favorites set, and storage write
/// failures are surfaced as warnings while the in-memory set keeps the change.
///
/// # Examples
///
/// ```
/// use animark::domain::AnimarkError;
///
/// fn validate_config() -> Result<(), AnimarkError> {
///     Err(AnimarkError::Config("missing api_base_url".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum AnimarkError {
    /// A remote catalog request failed.
    ///
    /// Covers transport errors, non-success HTTP statuses, and malformed
    /// response bodies. All three collapse into this single variant; callers
    /// only need to know that the fetch as a whole did not produce results.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A favorites store operation failed.
    ///
    /// Occurs when reading from or writing to the persistence slot fails, or
    /// when a stored payload cannot be decoded. The string contains a
    /// description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be read or parsed, or when
    /// required values are malformed. The string describes the problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for animark operations.
///
/// This is a type alias for `std::result::Result<T, AnimarkError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, AnimarkError>;
