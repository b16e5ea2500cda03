//! Fetcher module containing core fetch functionality, builder pattern, and configuration.
//!
//! This module provides the main [`Fetcher`] struct and its associated builder
//! pattern for configuring and executing checksum-gated fragment downloads. It
//! handles skip-if-valid resumption, bounded retries with a fixed delay, and
//! callback management.
//!
//! # Overview
//!
//! The fetcher module is organized into three main components:
//!
//! - `fetcher` - Core Fetcher struct with the fetch-verify-retry loop
//! - `builder` - FetcherBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structures and callback types
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use suture::fetcher::FetcherBuilder;
//! use suture::fragment::FragmentSpec;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a fetcher with default settings
//! let fetcher = FetcherBuilder::new().build();
//!
//! // Describe the fragments of one split archive
//! let specs = vec![
//!     FragmentSpec::from_parts(
//!         "https://example.com/assets/tool.zip.001",
//!         "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//!     )?,
//!     FragmentSpec::from_parts(
//!         "https://example.com/assets/tool.zip.002",
//!         "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//!     )?,
//! ];
//!
//! // Fetch them all into a download directory
//! let summaries = fetcher.fetch_group(&specs, Path::new("tool_downloads")).await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced Configuration
//!
//! ```rust
//! use suture::fetcher::FetcherBuilder;
//! use std::time::Duration;
//!
//! let fetcher = FetcherBuilder::new()
//!     .retries(5)
//!     .retry_delay(Duration::from_secs(1))
//!     .on_fragment(|summary| {
//!         println!("Fetched: {}", summary.fragment().filename);
//!     })
//!     .build();
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::{FetcherConfig, FragmentCallback};
pub use fetcher::Fetcher;
