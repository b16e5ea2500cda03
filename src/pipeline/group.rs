//! Asset group description.
//!
//! An [`AssetGroup`] names one logical split archive: the ordered fragments it
//! was split into, the directory the reassembled archive is extracted to, and
//! the temporary directory its fragments are downloaded into. Fragment order
//! is significant, it defines the concatenation order during assembly and
//! must equal the order the archive was originally split in.

use crate::fragment::FragmentSpec;

use std::path::{Path, PathBuf};

/// The complete set of fragments forming one extractable archive.
#[derive(Debug, Clone)]
pub struct AssetGroup {
    name: String,
    fragments: Vec<FragmentSpec>,
    extract_dir: PathBuf,
    download_dir: Option<PathBuf>,
}

impl AssetGroup {
    /// Creates a new [`AssetGroup`].
    ///
    /// ```rust
    /// use suture::fragment::FragmentSpec;
    /// use suture::pipeline::AssetGroup;
    /// use std::path::PathBuf;
    ///
    /// # fn main() -> Result<(), suture::Error> {
    /// let fragments = vec![FragmentSpec::from_parts(
    ///     "https://example.com/assets/tool.zip.001",
    ///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    /// )?];
    /// let group = AssetGroup::new("tool", fragments, PathBuf::from("resources/tool"));
    /// assert_eq!(group.download_dir(), PathBuf::from("tool_downloads"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(name: impl Into<String>, fragments: Vec<FragmentSpec>, extract_dir: PathBuf) -> Self {
        Self {
            name: name.into(),
            fragments,
            extract_dir,
            download_dir: None,
        }
    }

    /// Overrides the temporary download directory for this group.
    pub fn with_download_dir(mut self, download_dir: PathBuf) -> Self {
        self.download_dir = Some(download_dir);
        self
    }

    /// The group's name, e.g. "chrome".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered fragment specifications of this group.
    pub fn fragments(&self) -> &[FragmentSpec] {
        &self.fragments
    }

    /// Directory the reassembled archive is extracted into.
    pub fn extract_dir(&self) -> &Path {
        &self.extract_dir
    }

    /// Temporary directory fragments are downloaded into.
    ///
    /// Defaults to `<name>_downloads` next to the working directory.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_downloads", self.name)))
    }

    /// Path of the combined archive produced by assembly.
    pub fn combined_archive_path(&self) -> PathBuf {
        self.download_dir()
            .join(format!("{}_combined.zip", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CHECKSUM: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn test_group() -> AssetGroup {
        let fragments = vec![
            FragmentSpec::from_parts("http://example.com/tool.zip.001", TEST_CHECKSUM).unwrap(),
            FragmentSpec::from_parts("http://example.com/tool.zip.002", TEST_CHECKSUM).unwrap(),
        ];
        AssetGroup::new("tool", fragments, PathBuf::from("resources/tool"))
    }

    #[test]
    fn test_group_accessors() {
        let group = test_group();
        assert_eq!(group.name(), "tool");
        assert_eq!(group.fragments().len(), 2);
        assert_eq!(group.extract_dir(), Path::new("resources/tool"));
    }

    #[test]
    fn test_default_download_dir() {
        let group = test_group();
        assert_eq!(group.download_dir(), PathBuf::from("tool_downloads"));
        assert_eq!(
            group.combined_archive_path(),
            PathBuf::from("tool_downloads/tool_combined.zip")
        );
    }

    #[test]
    fn test_download_dir_override() {
        let group = test_group().with_download_dir(PathBuf::from("/tmp/suture_parts"));
        assert_eq!(group.download_dir(), PathBuf::from("/tmp/suture_parts"));
        assert_eq!(
            group.combined_archive_path(),
            PathBuf::from("/tmp/suture_parts/tool_combined.zip")
        );
    }

    #[test]
    fn test_fragment_order_is_preserved() {
        let group = test_group();
        assert_eq!(group.fragments()[0].filename, "tool.zip.001");
        assert_eq!(group.fragments()[1].filename, "tool.zip.002");
    }
}
