//! Error handling for the Suture library.
//!
//! This module provides centralized error handling with comprehensive error types
//! that can occur while fetching, verifying, assembling, and extracting split
//! archives. All errors implement the standard Error trait and provide detailed
//! context about failures.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using Suture.
///
/// This enum represents all possible errors that can occur while materializing
/// a split archive, providing detailed context and proper error chaining for
/// debugging and error handling.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other categories,
    /// typically representing unexpected system-level failures.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// This variant is returned when a provided URL cannot be parsed or doesn't
    /// conform to the expected format for HTTP/HTTPS downloads.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The expected checksum is not a hex-encoded SHA-256 digest.
    #[error("Invalid checksum: {0}")]
    InvalidChecksum(String),

    /// The manifest file could not be parsed.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// A fragment's digest does not match its expected checksum.
    #[error("Checksum mismatch for {path:?}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Path of the offending fragment file.
        path: PathBuf,
        /// Checksum the fragment was expected to have.
        expected: String,
        /// Checksum that was actually computed.
        actual: String,
    },

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors that can occur during file operations,
    /// such as creating, writing, or reading files while fetching or assembling
    /// fragments.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// This variant wraps HTTP client errors from the reqwest library, including
    /// network failures, HTTP status errors, and request/response processing errors.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// The combined archive could not be parsed or unpacked.
    #[error("Archive error: {message}")]
    Archive {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying error, if any.
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An archive entry uses a compression method the extractor does not handle.
    #[error("Unsupported compression method: {method}")]
    UnsupportedCompression {
        /// Raw compression method identifier from the archive entry.
        method: u16,
    },

    /// Fewer fragments than expected were verified for a group.
    #[error("Group \"{group}\" incomplete: {verified}/{expected} fragments verified")]
    IncompleteGroup {
        /// Name of the asset group.
        group: String,
        /// Number of fragments that passed verification.
        verified: usize,
        /// Number of fragments the group expects.
        expected: usize,
    },
}

/// Result type alias for operations that can fail with a Suture error.
///
/// This type alias provides a convenient way to return results from Suture operations
/// without having to specify the full `Result<T, Error>` type signature.
pub type Result<T> = std::result::Result<T, Error>;
