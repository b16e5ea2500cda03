//! Checksum verification functionality for fragments.
//!
//! This module computes SHA-256 digests of local files and compares them to
//! expected values. Files are read in bounded-size chunks so that verifying a
//! multi-gigabyte fragment never loads it into memory at once.
//!
//! # Examples
//!
//! ## Digest Computation
//!
//! ```rust,no_run
//! use suture::fragment::checksum::digest_file;
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), suture::Error> {
//! let digest = digest_file(&PathBuf::from("tool_downloads/tool.zip.001"))?;
//! println!("SHA-256: {}", digest);
//! # Ok(())
//! # }
//! ```
//!
//! ## File Verification
//!
//! ```rust,no_run
//! use suture::fragment::checksum::verify_file;
//! use std::path::PathBuf;
//!
//! let file_path = PathBuf::from("tool_downloads/tool.zip.001");
//! let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
//!
//! match verify_file(&file_path, expected) {
//!     Ok(true) => println!("Checksum verification passed!"),
//!     Ok(false) => println!("Checksum verification failed!"),
//!     Err(e) => println!("Error during verification: {}", e),
//! }
//! ```

use crate::error::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Size of the read buffer used while digesting a file.
const CHUNK_SIZE: usize = 8192;

/// Length of a hex-encoded SHA-256 digest.
const DIGEST_HEX_LEN: usize = 64;

/// Compute the SHA-256 digest of a local file.
///
/// The file is read in [`CHUNK_SIZE`] blocks and the digest is returned as a
/// lowercase hex string.
///
/// # Arguments
///
/// * `path` - Path to the file to digest
///
/// # Returns
///
/// * `Ok(digest)` with the lowercase hex digest
/// * `Err` if the file cannot be opened or read
pub fn digest_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Verify the SHA-256 digest of a local file against an expected value.
///
/// The comparison is case-insensitive so manifests may carry upper- or
/// lowercase hex.
///
/// # Arguments
///
/// * `path` - Path to the file to verify
/// * `expected` - Expected hex-encoded SHA-256 digest
///
/// # Returns
///
/// * `Ok(true)` if the digests match
/// * `Ok(false)` if they do not
/// * `Err` if the file cannot be read
pub fn verify_file(path: &Path, expected: &str) -> Result<bool> {
    let actual = digest_file(path)?;
    Ok(actual.eq_ignore_ascii_case(expected.trim()))
}

/// Check whether a string looks like a hex-encoded SHA-256 digest.
pub fn is_hex_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN && value.chars().all(|c| c.is_ascii_hexdigit())
}
