//! Suture is a crate aiming at providing a simple way to materialize large
//! binary assets that were split into checksummed fragments because of a
//! hosting size limit: it fetches each fragment over HTTP(S), verifies it
//! against a known SHA-256 digest, stitches the verified fragments back into
//! the original archive, and unpacks that archive into a destination
//! directory.
//!
//! Reruns are cheap: fragments already on disk with a matching checksum are
//! skipped without touching the network, and a failed group leaves its valid
//! fragments in place so the next run resumes where this one stopped.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use suture::{AssetGroup, FetcherBuilder, FragmentSpec, Pipeline};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), suture::Error> {
//! let fragments = vec![
//!     FragmentSpec::from_parts(
//!         "https://example.com/assets/tool.zip.001",
//!         "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//!     )?,
//!     FragmentSpec::from_parts(
//!         "https://example.com/assets/tool.zip.002",
//!         "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//!     )?,
//! ];
//! let group = AssetGroup::new("tool", fragments, PathBuf::from("resources/tool"));
//!
//! let fetcher = FetcherBuilder::new().retries(3).build();
//! let reports = Pipeline::new(fetcher, vec![group]).run().await;
//! for report in reports {
//!     println!("{}: {:?}", report.name(), report.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The suture crate is organized into several modules:
//!
//! - [`fragment`] - Fragment specifications, per-fragment summaries, and SHA-256 verification
//! - [`fetcher`] - The `Fetcher` and `FetcherBuilder` running the checksum-gated retry loop
//! - [`archive`] - Assembly of verified fragments and ZIP extraction
//! - [`pipeline`] - The `Pipeline` orchestrating fetch → assemble → extract per asset group
//! - [`manifest`] - TOML manifest loading for externally configured asset groups
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client functionality and middleware setup

pub mod archive;
pub mod error;
pub mod fetcher;
pub mod fragment;
pub mod http;
pub mod manifest;
pub mod pipeline;

pub use archive::{assemble, extract, ZipEntry};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use fragment::checksum::{digest_file, verify_file};
pub use fragment::{FragmentSpec, LocalFragment, Status, Summary};
pub use http::{create_http_client, HttpClientConfig};
pub use manifest::Manifest;
pub use pipeline::{AssetGroup, GroupReport, GroupStatus, Pipeline};
