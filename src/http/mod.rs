//! HTTP module containing HTTP client functionality.
//!
//! This module provides HTTP client setup, configuration, and middleware for
//! fragment downloads. It handles client creation with tracing, proxy support,
//! and default headers.
//!
//! # Examples
//!
//! ## Creating an HTTP Client
//!
//! ```rust
//! use suture::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create client with custom configuration
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyBootstrap/1.0".parse()?);
//!
//! let config = HttpClientConfig {
//!     proxy: None,
//!     headers: Some(headers),
//! };
//!
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
