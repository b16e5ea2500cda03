//! Builder pattern implementation for creating Fetcher instances.
//!
//! This module provides the [`FetcherBuilder`] struct that implements the builder
//! pattern for configuring and creating [`Fetcher`] instances. It allows for
//! flexible configuration of retry behavior, HTTP settings, and callback
//! functions.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use suture::fetcher::FetcherBuilder;
//! use std::time::Duration;
//!
//! let fetcher = FetcherBuilder::new()
//!     .retries(3)
//!     .retry_delay(Duration::from_secs(2))
//!     .build();
//! ```
//!
//! ## Advanced Configuration with Callbacks
//!
//! ```rust
//! use suture::fetcher::FetcherBuilder;
//! use suture::fragment::Status;
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyBootstrap/1.0".parse()?);
//!
//! let fetcher = FetcherBuilder::new()
//!     .headers(headers)
//!     .on_fragment(|summary| {
//!         match summary.status() {
//!             Status::Success => println!("Fetched: {}", summary.fragment().filename),
//!             Status::Fail(msg) => println!("Failed: {} - {}", summary.fragment().filename, msg),
//!             _ => {}
//!         }
//!     })
//!     .build();
//! # Ok(())
//! # }
//! ```

use super::{config::FetcherConfig, fetcher::Fetcher};
use crate::fragment::Summary;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// # fn main()  {
/// use suture::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().retries(5).build();
/// # }
/// ```
#[derive(Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Set the number of download attempts per fragment.
    ///
    /// Values below one are treated as a single attempt.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Set the delay between failed attempts.
    pub fn retry_delay(mut self, retry_delay: Duration) -> Self {
        self.config.retry_delay = retry_delay;
        self
    }

    /// Set the number of fragments fetched concurrently within a group.
    ///
    /// The default of one reproduces strictly sequential fetching. Raising it
    /// never affects assembly order, which always follows the specification
    /// order of the group.
    pub fn concurrent_fetches(mut self, concurrent_fetches: usize) -> Self {
        self.config.concurrent_fetches = concurrent_fetches;
        self
    }

    /// Set the proxy used for all fragment requests.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set callback for when each fragment completes.
    ///
    /// The callback will be called immediately when each fragment finishes,
    /// whether it was skipped, downloaded, or failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use suture::fetcher::FetcherBuilder;
    /// use suture::fragment::Status;
    ///
    /// let fetcher = FetcherBuilder::new()
    ///     .on_fragment(|summary| {
    ///         match summary.status() {
    ///             Status::Success => {
    ///                 println!("[Success] {} downloaded", summary.fragment().filename);
    ///             }
    ///             Status::Skipped(reason) => {
    ///                 println!("[Skipped] {} - {}", summary.fragment().filename, reason);
    ///             }
    ///             Status::Fail(error) => {
    ///                 println!("[Failed] {} - {}", summary.fragment().filename, error);
    ///             }
    ///             _ => {}
    ///         }
    ///     })
    ///     .build();
    /// ```
    pub fn on_fragment<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_fragment = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You need to pass in a `HeaderMap`, not a `HeaderName`.
    /// `HeaderMap` is a set of http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use suture::fetcher::FetcherBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = FetcherBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: FetcherBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// # Example
    ///
    /// You can use the `.header()` chain to add multiple headers
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use suture::fetcher::FetcherBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = FetcherBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    ///
    /// If you need to pass in a `HeaderMap`, instead of calling `.header()` multiple times.
    /// See also [`headers()`].
    ///
    /// [`headers()`]: FetcherBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
