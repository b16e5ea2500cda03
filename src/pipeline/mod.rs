//! Pipeline module containing the group-level orchestration.
//!
//! This module drives the full fetch → verify → assemble → extract sequence
//! for each configured asset group and reports a per-group outcome.
//!
//! # Overview
//!
//! The pipeline module is organized into three main components:
//!
//! - `group` - The [`AssetGroup`] description of one split archive
//! - `pipeline` - The [`Pipeline`] orchestrator
//! - `report` - Per-group outcome reporting via [`GroupReport`] and [`GroupStatus`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use suture::fetcher::FetcherBuilder;
//! use suture::fragment::FragmentSpec;
//! use suture::pipeline::{AssetGroup, Pipeline};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fragments = vec![FragmentSpec::from_parts(
//!     "https://example.com/assets/tool.zip.001",
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//! )?];
//! let group = AssetGroup::new("tool", fragments, PathBuf::from("resources/tool"));
//!
//! let fetcher = FetcherBuilder::new().build();
//! let reports = Pipeline::new(fetcher, vec![group]).run().await;
//! for report in &reports {
//!     println!("{}: {:?}", report.name(), report.status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod group;
pub mod pipeline;
pub mod report;

pub use group::AssetGroup;
pub use pipeline::Pipeline;
pub use report::{GroupReport, GroupStatus};
