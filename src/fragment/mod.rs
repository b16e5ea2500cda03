//! Fragment module containing fragment-related functionality.
//!
//! This module provides structures and functions for handling the parts of a
//! split archive, including the core [`FragmentSpec`] struct, per-fragment
//! outcome reporting, and checksum verification. It serves as the foundation
//! for all fetch operations in the suture crate.
//!
//! # Overview
//!
//! The fragment module is organized into three main components:
//!
//! - [`fragment`] - Core FragmentSpec struct and URL handling
//! - [`summary`] - Fragment result tracking and status reporting
//! - [`checksum`] - File integrity verification through SHA-256 digests
//!
//! # Examples
//!
//! ## Describing a Fragment
//!
//! ```rust
//! use suture::fragment::FragmentSpec;
//!
//! // Describe a fragment by its URL and expected SHA-256 checksum
//! let spec = FragmentSpec::from_parts(
//!     "https://example.com/assets/tool.zip.001",
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//! )?;
//! assert_eq!(spec.filename, "tool.zip.001");
//! # Ok::<(), suture::Error>(())
//! ```
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
//! // Check the fragment status
//! match summary.status() {
//!     Status::Success => println!("Fragment downloaded and verified"),
//!     Status::Skipped(reason) => println!("Fragment skipped: {}", reason),
//!     Status::Fail(msg) => println!("Fragment failed: {}", msg),
//!     _ => println!("Fragment not fetched yet"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Checksum Verification
//!
//! ```rust,no_run
//! use suture::fragment::checksum::verify_file;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), suture::Error> {
//! let file_path = PathBuf::from("tool_downloads/tool.zip.001");
//! let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
//! let is_valid = verify_file(&file_path, expected)?;
//! println!("Verification: {}", if is_valid { "passed" } else { "failed" });
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod fragment;
pub mod summary;

pub use checksum::{digest_file, is_hex_digest, verify_file};
pub use fragment::{FragmentSpec, LocalFragment};
pub use summary::{Status, Summary};
