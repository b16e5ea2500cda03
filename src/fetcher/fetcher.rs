//! Core fetcher implementation with the fetch-verify-retry loop.
//!
//! This module contains the main [`Fetcher`] struct that obtains fragments
//! with support for skip-if-valid resumption, bounded retries with a fixed
//! delay, and checksum gating: a fragment only counts as fetched once its
//! SHA-256 digest matches its specification.
//!
//! # Examples
//!
//! ## Fetching a Group of Fragments
//!
//! ```rust,no_run
//! use suture::fetcher::FetcherBuilder;
//! use suture::fragment::FragmentSpec;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new().build();
//! let specs = vec![
//!     FragmentSpec::from_parts(
//!         "https://example.com/assets/tool.zip.001",
//!         "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
//!     )?,
//! ];
//!
//! let summaries = fetcher.fetch_group(&specs, Path::new("tool_downloads")).await;
//! for summary in summaries {
//!     println!("{}: {:?}", summary.fragment().filename, summary.status());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::FetcherConfig;
use crate::error::Error;
use crate::fragment::{FragmentSpec, Status, Summary};
use crate::http::{create_http_client, HttpClientConfig};

use futures::stream::{self, StreamExt};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::{debug, info, warn};

/// Represents the fragment fetch controller.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use suture::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the number of download attempts per fragment.
    pub fn retries(&self) -> u32 {
        self.config.retries
    }

    /// Gets the delay between failed attempts.
    pub fn retry_delay(&self) -> Duration {
        self.config.retry_delay
    }

    /// Gets the number of fragments fetched concurrently within a group.
    pub fn concurrent_fetches(&self) -> usize {
        self.config.concurrent_fetches
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&reqwest::header::HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Fetches every fragment of a group into `dest_dir`.
    ///
    /// Fragments are attempted in specification order and the returned
    /// summaries keep that order, whatever the completion order. A fragment
    /// that fails does not abort the remainder of the group, so valid
    /// fragments accumulate on disk for the next run.
    pub async fn fetch_group(&self, specs: &[FragmentSpec], dest_dir: &Path) -> Vec<Summary> {
        let config = HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        };

        let client = match create_http_client(config) {
            Ok(client) => client,
            Err(e) => {
                return specs
                    .iter()
                    .map(|spec| {
                        self.complete(
                            Summary::new(spec.clone(), spec.target_path(dest_dir))
                                .fail(format!("Failed to create HTTP client: {}", e)),
                        )
                    })
                    .collect();
            }
        };

        // `buffered` keeps the output in specification order even when more
        // than one fragment is in flight.
        stream::iter(specs)
            .map(|spec| self.fetch(&client, spec, dest_dir))
            .buffered(self.config.concurrent_fetches.max(1))
            .collect::<Vec<_>>()
            .await
    }

    /// Fetches a single fragment and writes it to disk.
    ///
    /// If a file with a matching checksum already exists at the target path,
    /// the download is skipped without touching the network. Otherwise up to
    /// [`Fetcher::retries`] attempts are made; transport failures and checksum
    /// mismatches are retried after [`Fetcher::retry_delay`], while local I/O
    /// failures end the fetch immediately.
    pub async fn fetch(
        &self,
        client: &ClientWithMiddleware,
        spec: &FragmentSpec,
        dest_dir: &Path,
    ) -> Summary {
        let target = spec.target_path(dest_dir);
        let mut summary = Summary::new(spec.clone(), target.clone());

        // Check if the fragment exists and its checksum matches.
        if target.exists() {
            match spec.verify(&target) {
                Ok(true) => {
                    let size = fs::metadata(&target).await.map(|m| m.len()).unwrap_or(0);
                    info!(
                        fragment = spec.filename.as_str(),
                        "fragment already on disk with matching checksum, skipping download"
                    );
                    return self.complete(
                        summary
                            .with_size(size)
                            .skip("fragment exists with matching checksum"),
                    );
                }
                Ok(false) => {
                    warn!(
                        fragment = spec.filename.as_str(),
                        "existing fragment failed verification, downloading again"
                    );
                }
                Err(_) => {
                    // An unreadable file counts as absent; the download below
                    // will surface a persistent I/O problem.
                }
            }
        }

        if let Err(e) = fs::create_dir_all(dest_dir).await {
            return self.complete(summary.fail(format!(
                "Failed to create download directory {:?}: {}",
                dest_dir, e
            )));
        }

        let retries = self.config.retries.max(1);
        let mut last_failure = Status::Fail("no download attempts were made".into());

        for attempt in 1..=retries {
            summary = summary.with_attempts(attempt);
            info!(
                fragment = spec.filename.as_str(),
                attempt, "downloading {}", spec.url
            );

            match self.try_download(client, spec, &target).await {
                Ok(size) => match spec.verify(&target) {
                    Ok(true) => {
                        debug!(fragment = spec.filename.as_str(), size, "fragment verified");
                        return self.complete(
                            summary.with_size(size).with_status(Status::Success),
                        );
                    }
                    Ok(false) => {
                        warn!(
                            fragment = spec.filename.as_str(),
                            attempt, "downloaded fragment failed checksum verification"
                        );
                        last_failure = Status::ChecksumMismatch(format!(
                            "digest did not match {} on attempt {}",
                            spec.checksum, attempt
                        ));
                    }
                    Err(e) => {
                        return self.complete(
                            summary.fail(format!("Failed to verify {:?}: {}", target, e)),
                        );
                    }
                },
                // Local filesystem failures are not retried.
                Err(Error::IOError { source }) => {
                    return self
                        .complete(summary.fail(format!("Local I/O failure: {}", source)));
                }
                Err(e) => {
                    warn!(
                        fragment = spec.filename.as_str(),
                        attempt, "download failed: {}", e
                    );
                    last_failure = Status::Fail(format!("attempt {} failed: {}", attempt, e));
                }
            }

            if attempt < retries {
                tokio::time::sleep(self.config.retry_delay).await;
            }
        }

        warn!(
            fragment = spec.filename.as_str(),
            attempts = retries,
            "giving up after exhausting download attempts"
        );
        self.complete(summary.with_status(last_failure))
    }

    /// Performs one full download attempt, streaming the body to disk.
    ///
    /// Any prior partial content at the target path is truncated, so an
    /// attempt always produces the complete response body or an error.
    async fn try_download(
        &self,
        client: &ClientWithMiddleware,
        spec: &FragmentSpec,
        target: &Path,
    ) -> Result<u64, Error> {
        let res = client
            .get(spec.url.clone())
            .send()
            .await
            .map_err(middleware_error)?;
        let res = res.error_for_status().map_err(Error::from)?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(target)
            .await?;

        let mut size: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            size += chunk.len() as u64;
            file.write_all_buf(&mut chunk).await?;
        }
        file.flush().await?;

        Ok(size)
    }

    /// Helper method to run the completion callback on a terminal summary.
    fn complete(&self, summary: Summary) -> Summary {
        if let Some(ref callback) = self.config.on_fragment {
            callback(&summary);
        }
        summary
    }
}

fn middleware_error(err: reqwest_middleware::Error) -> Error {
    match err {
        reqwest_middleware::Error::Reqwest(e) => Error::from(e),
        reqwest_middleware::Error::Middleware(e) => Error::Internal(e.to_string()),
    }
}
