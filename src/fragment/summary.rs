//! Fragment summary functionality.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum for tracking
//! fragment results and status. A summary records where a fragment was written,
//! how many download attempts it consumed, and whether it ended up verified.
//!
//! # Examples
//!
//! ## Working with Fragment Status
//!
//! ```rust
//! use suture::fragment::{FragmentSpec, Status, Summary};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), suture::Error> {
//! let spec = FragmentSpec::from_parts(
//!     "https://example.com/assets/tool.zip.001",
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//! )?;
//! let summary = Summary::new(spec, PathBuf::from("tool_downloads/tool.zip.001"));
//!
//! match summary.status() {
//!     Status::NotStarted => println!("Fetch not yet started"),
//!     Status::Success => println!("Fragment downloaded and verified"),
//!     Status::Skipped(reason) => println!("Fragment skipped: {}", reason),
//!     Status::ChecksumMismatch(details) => println!("Checksum mismatch: {}", details),
//!     Status::Fail(msg) => println!("Fragment failed: {}", msg),
//! }
//!
//! // Mark as failed
//! let failed = summary.fail("Network timeout");
//! assert!(!failed.is_verified());
//! # Ok(())
//! # }
//! ```

use super::fragment::{FragmentSpec, LocalFragment};
use std::path::{Path, PathBuf};

/// Fragment status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Fetch failed with error message
    Fail(String),
    /// Fetch not yet started
    NotStarted,
    /// Download was skipped with reason (fragment already valid on disk)
    Skipped(String),
    /// Fragment downloaded and verified successfully
    Success,
    /// All attempts exhausted with the digest never matching
    ChecksumMismatch(String),
}

impl Status {
    /// Whether this status represents a verified on-disk fragment.
    pub fn is_verified(&self) -> bool {
        matches!(self, Status::Success | Status::Skipped(_))
    }
}

/// Represents a [`FragmentSpec`] fetch summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Fragment the summary describes.
    fragment: FragmentSpec,
    /// Path the fragment was (or would have been) written to.
    path: PathBuf,
    /// Bytes on disk for this fragment.
    size: u64,
    /// Download attempts consumed; zero for skipped fragments.
    attempts: u32,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`FragmentSpec`] fetch [`Summary`].
    pub fn new(fragment: FragmentSpec, path: PathBuf) -> Self {
        Self {
            fragment,
            path,
            size: 0,
            attempts: 0,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a [`Summary`].
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Record the number of bytes on disk.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    /// Record the number of download attempts consumed.
    pub fn with_attempts(self, attempts: u32) -> Self {
        Self { attempts, ..self }
    }

    /// Get a reference to the summary's fragment.
    pub fn fragment(&self) -> &FragmentSpec {
        &self.fragment
    }

    /// Get the path the fragment was written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the number of download attempts consumed.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Get a reference to the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the fragment ended up verified on disk.
    pub fn is_verified(&self) -> bool {
        self.status.is_verified()
    }

    /// The verified on-disk fragment, if verification succeeded.
    pub fn local_fragment(&self) -> Option<LocalFragment> {
        self.is_verified()
            .then(|| LocalFragment::new(self.fragment.clone(), self.path.clone()))
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Skipped(format!("{}", msg)),
            ..self
        }
    }

    /// Mark the summary as having a checksum mismatch with a message.
    pub fn checksum_mismatch(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::ChecksumMismatch(format!("{}", msg)),
            ..self
        }
    }
}
