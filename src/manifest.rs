//! Manifest loading for asset groups.
//!
//! A manifest is a TOML file listing, per asset group, the ordered fragment
//! URLs with their expected SHA-256 checksums and the directory the
//! reassembled archive is extracted to. It replaces hardcoded fragment lists
//! so deployments can swap assets without rebuilding.
//!
//! # Example
//!
//! ```rust
//! use suture::manifest::Manifest;
//!
//! let manifest = Manifest::parse(
//!     r#"
//!     [[group]]
//!     name = "tool"
//!     extract_dir = "resources/tool"
//!
//!     [[group.fragment]]
//!     url = "https://example.com/assets/tool.zip.001"
//!     sha256 = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//!
//!     [[group.fragment]]
//!     url = "https://example.com/assets/tool.zip.002"
//!     sha256 = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//!     "#,
//! )?;
//!
//! let groups = manifest.into_groups()?;
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].fragments().len(), 2);
//! # Ok::<(), suture::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::fragment::FragmentSpec;
use crate::pipeline::AssetGroup;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed asset manifest.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Asset groups, in processing order.
    #[serde(default, rename = "group")]
    pub groups: Vec<ManifestGroup>,
}

/// One asset group as listed in the manifest.
#[derive(Debug, Deserialize)]
pub struct ManifestGroup {
    /// Group name, e.g. "chrome".
    pub name: String,
    /// Directory the reassembled archive is extracted into.
    pub extract_dir: PathBuf,
    /// Optional override for the temporary download directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Ordered fragments; order must match how the archive was split.
    #[serde(default, rename = "fragment")]
    pub fragments: Vec<ManifestFragment>,
}

/// One fragment as listed in the manifest.
#[derive(Debug, Deserialize)]
pub struct ManifestFragment {
    /// URL the fragment is fetched from.
    pub url: String,
    /// Expected SHA-256 checksum, hex-encoded.
    pub sha256: String,
}

impl Manifest {
    /// Parses a manifest from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidManifest(e.to_string()))
    }

    /// Reads and parses a manifest file.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Validates every entry and converts the manifest into asset groups.
    pub fn into_groups(self) -> Result<Vec<AssetGroup>> {
        self.groups
            .into_iter()
            .map(|entry| {
                let fragments = entry
                    .fragments
                    .iter()
                    .map(|f| FragmentSpec::from_parts(&f.url, &f.sha256))
                    .collect::<Result<Vec<_>>>()?;
                let mut group = AssetGroup::new(entry.name, fragments, entry.extract_dir);
                if let Some(download_dir) = entry.download_dir {
                    group = group.with_download_dir(download_dir);
                }
                Ok(group)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CHECKSUM: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn sample_manifest() -> String {
        format!(
            r#"
            [[group]]
            name = "chrome"
            extract_dir = "resources/chrome"

            [[group.fragment]]
            url = "https://example.com/chrome/chrome.zip.001"
            sha256 = "{sum}"

            [[group.fragment]]
            url = "https://example.com/chrome/chrome.zip.002"
            sha256 = "{sum}"

            [[group]]
            name = "firefox"
            extract_dir = "resources/firefox"
            download_dir = "/tmp/firefox_parts"

            [[group.fragment]]
            url = "https://example.com/firefox/firefox.zip.001"
            sha256 = "{sum}"
            "#,
            sum = TEST_CHECKSUM
        )
    }

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::parse(&sample_manifest()).unwrap();
        assert_eq!(manifest.groups.len(), 2);
        assert_eq!(manifest.groups[0].name, "chrome");
        assert_eq!(manifest.groups[0].fragments.len(), 2);
        assert_eq!(manifest.groups[1].fragments.len(), 1);
    }

    #[test]
    fn test_into_groups_preserves_order() {
        let groups = Manifest::parse(&sample_manifest())
            .unwrap()
            .into_groups()
            .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].fragments()[0].filename, "chrome.zip.001");
        assert_eq!(groups[0].fragments()[1].filename, "chrome.zip.002");
        assert_eq!(
            groups[1].download_dir(),
            PathBuf::from("/tmp/firefox_parts")
        );
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let result = Manifest::parse("not [valid toml");
        assert!(matches!(result, Err(Error::InvalidManifest(_))));
    }

    #[test]
    fn test_into_groups_rejects_bad_checksum() {
        let manifest = Manifest::parse(
            r#"
            [[group]]
            name = "tool"
            extract_dir = "resources/tool"

            [[group.fragment]]
            url = "https://example.com/tool.zip.001"
            sha256 = "too-short"
            "#,
        )
        .unwrap();

        assert!(matches!(
            manifest.into_groups(),
            Err(Error::InvalidChecksum(_))
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Manifest::from_path(Path::new("suture_missing_manifest.toml"));
        assert!(matches!(result, Err(Error::IOError { .. })));
    }
}
