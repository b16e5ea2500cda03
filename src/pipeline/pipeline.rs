//! Pipeline orchestration across asset groups.
//!
//! The [`Pipeline`] runs the whole bootstrap: for each configured
//! [`AssetGroup`] it fetches every fragment, and only when all of them are
//! verified does it assemble the combined archive, extract it into the
//! group's destination, and remove the temporary download directory. Groups
//! are independent: one group failing never stops the next from running, and
//! a failed group keeps its verified fragments on disk so a later run can
//! resume where this one stopped.

use super::group::AssetGroup;
use super::report::{GroupReport, GroupStatus};
use crate::archive::{assemble, zip};
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::fragment::LocalFragment;

use tokio::fs;
use tracing::{debug, info, warn};

/// Drives the fetch → assemble → extract sequence for a set of asset groups.
///
/// ```rust,no_run
/// use suture::fetcher::FetcherBuilder;
/// use suture::fragment::FragmentSpec;
/// use suture::pipeline::{AssetGroup, Pipeline};
/// use std::path::PathBuf;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fragments = vec![FragmentSpec::from_parts(
///     "https://example.com/assets/tool.zip.001",
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// )?];
/// let group = AssetGroup::new("tool", fragments, PathBuf::from("resources/tool"));
///
/// let reports = Pipeline::new(FetcherBuilder::new().build(), vec![group])
///     .run()
///     .await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    fetcher: Fetcher,
    groups: Vec<AssetGroup>,
}

impl Pipeline {
    /// Creates a new [`Pipeline`] over the given groups.
    pub fn new(fetcher: Fetcher, groups: Vec<AssetGroup>) -> Self {
        Self { fetcher, groups }
    }

    /// The configured asset groups.
    pub fn groups(&self) -> &[AssetGroup] {
        &self.groups
    }

    /// Processes every group in order and returns one report per group.
    pub async fn run(&self) -> Vec<GroupReport> {
        let mut reports = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            reports.push(self.run_group(group).await);
        }

        let complete = reports.iter().filter(|r| r.is_complete()).count();
        if complete == reports.len() {
            info!(groups = complete, "all asset groups completed");
        } else {
            warn!(
                complete,
                total = reports.len(),
                "one or more asset groups did not complete"
            );
        }

        reports
    }

    async fn run_group(&self, group: &AssetGroup) -> GroupReport {
        info!(
            group = group.name(),
            fragments = group.fragments().len(),
            "processing asset group"
        );

        let download_dir = group.download_dir();
        let summaries = self.fetcher.fetch_group(group.fragments(), &download_dir).await;

        // No partial assembly: the group proceeds only when every fragment
        // verified (summaries stay in specification order).
        let fragments: Vec<LocalFragment> =
            summaries.iter().filter_map(|s| s.local_fragment()).collect();
        if fragments.len() != group.fragments().len() {
            warn!(
                group = group.name(),
                verified = fragments.len(),
                expected = group.fragments().len(),
                "group incomplete, skipping assembly and extraction"
            );
            return GroupReport::new(
                group.name(),
                summaries,
                GroupStatus::Incomplete {
                    verified: fragments.len(),
                    expected: group.fragments().len(),
                },
            );
        }

        match self.finish_group(group, &fragments).await {
            Ok(()) => {
                info!(group = group.name(), "asset group complete");
                GroupReport::new(group.name(), summaries, GroupStatus::Complete)
            }
            Err(e) => {
                warn!(group = group.name(), "asset group failed: {}", e);
                GroupReport::new(group.name(), summaries, GroupStatus::Failed(e.to_string()))
            }
        }
    }

    /// Assemble, extract, and clean up one fully verified group.
    async fn finish_group(&self, group: &AssetGroup, fragments: &[LocalFragment]) -> Result<()> {
        let combined = group.combined_archive_path();

        // A stale combined archive from an interrupted run would make the
        // exclusive create below fail.
        if combined.exists() {
            debug!(archive = %combined.display(), "removing stale combined archive");
            fs::remove_file(&combined).await?;
        }

        let bytes = assemble(fragments, &combined).await?;
        info!(
            group = group.name(),
            bytes,
            archive = %combined.display(),
            "fragments assembled"
        );

        zip::extract(&combined, group.extract_dir())?;

        fs::remove_dir_all(group.download_dir()).await?;
        debug!(group = group.name(), "download directory removed");

        Ok(())
    }
}
