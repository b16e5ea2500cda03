//! Configuration structures and defaults for the fetcher.
//!
//! This module provides configuration structures used by the [`Fetcher`] and
//! [`FetcherBuilder`]. It defines callback types and the main fetcher
//! configuration structure with sensible defaults.
//!
//! [`Fetcher`]: super::Fetcher
//! [`FetcherBuilder`]: super::FetcherBuilder
//!
//! # Examples
//!
//! ## Using Callbacks
//!
//! ```rust
//! use suture::fetcher::FragmentCallback;
//! use suture::fragment::{Status, Summary};
//!
//! // Create a callback function
//! let callback: FragmentCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Success => println!("✓ Downloaded: {}", summary.fragment().filename),
//!         Status::Skipped(reason) => println!("- Skipped: {} ({})", summary.fragment().filename, reason),
//!         Status::Fail(msg) => println!("✗ Failed: {} - {}", summary.fragment().filename, msg),
//!         _ => {}
//!     }
//! });
//! ```

use crate::fragment::Summary;

use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for fragment completion events
pub type FragmentCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the fetcher
#[derive(Clone)]
pub struct FetcherConfig {
    /// Number of download attempts per fragment.
    pub retries: u32,
    /// Delay between failed attempts.
    pub retry_delay: Duration,
    /// Number of fragments fetched concurrently within a group.
    pub concurrent_fetches: usize,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Callback for when each fragment completes.
    pub on_fragment: Option<Arc<FragmentCallback>>,
}

impl std::fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("retries", &self.retries)
            .field("retry_delay", &self.retry_delay)
            .field("concurrent_fetches", &self.concurrent_fetches)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy.is_some())
            .field("on_fragment", &self.on_fragment.is_some())
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            retries: 3,
            retry_delay: Duration::from_secs(2),
            concurrent_fetches: 1,
            headers: None,
            proxy: None,
            on_fragment: None,
        }
    }
}
