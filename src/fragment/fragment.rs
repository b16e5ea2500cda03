//! Core fragment functionality.
//!
//! This module contains the [`FragmentSpec`] struct and related functionality
//! for describing the parts of a split archive. It provides URL parsing,
//! filename extraction, and checksum verification against local files.
//!
//! # Examples
//!
//! ## Creating Fragment Specs
//!
//! ```rust
//! use suture::fragment::FragmentSpec;
//!
//! // Create from a URL string (filename extracted automatically)
//! let spec = FragmentSpec::from_parts(
//!     "https://example.com/assets/tool.zip.001",
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//! )?;
//! assert_eq!(spec.filename, "tool.zip.001");
//!
//! // Or from a (url, checksum) pair as listed in a manifest
//! let spec = FragmentSpec::try_from((
//!     "https://example.com/assets/tool.zip.002",
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//! ))?;
//! # Ok::<(), suture::Error>(())
//! ```

use crate::error::Error;
use crate::fragment::checksum;

use reqwest::Url;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

/// Represents one downloadable part of a split archive.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpec {
    /// URL of the fragment to download.
    pub url: Url,
    /// File name used to save the fragment on disk.
    pub filename: String,
    /// Expected SHA-256 checksum of the fragment, lowercase hex.
    pub checksum: String,
}

impl FragmentSpec {
    /// Creates a new [`FragmentSpec`].
    ///
    /// The checksum must be a hex-encoded SHA-256 digest; it is normalized to
    /// lowercase. Use [`FragmentSpec::from_parts`] to derive the filename from
    /// the URL instead of supplying it explicitly.
    pub fn new(url: &Url, filename: &str, checksum: &str) -> Result<Self, Error> {
        if !checksum::is_hex_digest(checksum) {
            return Err(Error::InvalidChecksum(format!(
                "\"{}\" is not a hex-encoded SHA-256 digest",
                checksum
            )));
        }
        Ok(Self {
            url: url.clone(),
            filename: String::from(filename),
            checksum: checksum.to_lowercase(),
        })
    }

    /// Creates a new [`FragmentSpec`] from a URL string and an expected checksum.
    ///
    /// The file name is automatically extracted from the last path segment of
    /// the URL, with percent-encoding decoded.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use suture::fragment::FragmentSpec;
    ///
    /// let spec = FragmentSpec::from_parts(
    ///     "https://example.com/bundle/archive.zip.004",
    ///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    /// )?;
    /// assert_eq!(spec.filename, "archive.zip.004");
    /// # Ok::<(), suture::Error>(())
    /// ```
    pub fn from_parts(url: &str, checksum: &str) -> Result<Self, Error> {
        let url = Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))?;
        let filename = filename_from_url(&url)?;
        Self::new(&url, &filename, checksum)
    }

    /// Calculate the SHA-256 digest of a local file and compare it with the
    /// expected checksum.
    ///
    /// Returns `Ok(false)` when the file does not exist; an unreadable file is
    /// an error the caller should treat as "not valid".
    pub fn verify(&self, file_path: &Path) -> Result<bool, Error> {
        if !file_path.exists() {
            return Ok(false);
        }
        checksum::verify_file(file_path, &self.checksum)
    }

    /// Path where the fragment is stored inside a download directory.
    pub fn target_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.filename)
    }
}

impl TryFrom<(&str, &str)> for FragmentSpec {
    type Error = crate::error::Error;

    fn try_from((url, checksum): (&str, &str)) -> Result<Self, Self::Error> {
        FragmentSpec::from_parts(url, checksum)
    }
}

fn filename_from_url(url: &Url) -> Result<String, Error> {
    url.path_segments()
        .ok_or_else(|| {
            Error::InvalidUrl(format!("The url \"{}\" does not contain a valid path", url))
        })?
        .next_back()
        .filter(|segment| !segment.is_empty())
        .map(|filename| {
            form_urlencoded::parse(filename.as_bytes())
                .map(|(key, val)| [key, val].concat())
                .collect()
        })
        .ok_or_else(|| {
            Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", url))
        })
}

/// A fragment that exists on disk and passed checksum verification.
///
/// Instances are only created for verified fragments; assembly consumes them
/// in specification order.
#[derive(Debug, Clone)]
pub struct LocalFragment {
    spec: FragmentSpec,
    path: PathBuf,
}

impl LocalFragment {
    /// Creates a new [`LocalFragment`] for a verified on-disk fragment.
    pub fn new(spec: FragmentSpec, path: PathBuf) -> Self {
        Self { spec, path }
    }

    /// The specification this fragment satisfies.
    pub fn spec(&self) -> &FragmentSpec {
        &self.spec
    }

    /// Location of the verified fragment file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
