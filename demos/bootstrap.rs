//! Example bootstrapping the split browser bundles used by a Selenium setup.
//!
//! Destination directories can be passed as the first and second CLI
//! arguments; otherwise conventional subpaths are used. Already-valid
//! fragments on disk are skipped, so rerunning after a partial failure only
//! fetches what is still missing.

use color_eyre::Result;
use std::path::PathBuf;
use suture::{AssetGroup, FetcherBuilder, FragmentSpec, Pipeline};
use tracing_subscriber::EnvFilter;

const CHROME_FRAGMENTS: &[(&str, &str)] = &[
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/chrome-win/chrome.zip.001",
        "10f671ea4c8325e4f6286e26e9565051a92ae0db8377d06b0f4d2b4d3babf145",
    ),
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/chrome-win/chrome.zip.002",
        "9045148b91282238c7086489c79f7acd88d8ec6f6fa448015560bf38c7a6a041",
    ),
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/chrome-win/chrome.zip.003",
        "2d58643f6b13d1ef88f8caaf860f833e6680d5a933e2d5a345b3396e2d547b7d",
    ),
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/chrome-win/chrome.zip.004",
        "da16163d9520fe8bf9db83ef729bee9b01255b5260d89a841a4a261368c87c13",
    ),
];

const FIREFOX_FRAGMENTS: &[(&str, &str)] = &[
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/firefox-win/firefox.zip.001",
        "eada3b238a9940a502e15c8888991f9810f91a644296f5c8be58ceb0a9954096",
    ),
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/firefox-win/firefox.zip.002",
        "273578a4481f6d2979a46d0ef63457c9a951b980c435320ac535a15bd97b8123",
    ),
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/firefox-win/firefox.zip.003",
        "3365d3ea171e20e32016da8f3e52c2004d2315da1cab06a4bb31c693d5dd93f7",
    ),
    (
        "https://raw.githubusercontent.com/mike2367/selenium-up/refs/heads/browser-drivers/firefox-win/firefox.zip.004",
        "56c782a7d28d239dc307b64ca09951aa58fac6bc4b53ac1d64298f70ba07f7b3",
    ),
];

fn build_group(
    name: &str,
    table: &[(&str, &str)],
    extract_dir: PathBuf,
) -> suture::Result<AssetGroup> {
    let fragments = table
        .iter()
        .map(|&(url, sha256)| FragmentSpec::from_parts(url, sha256))
        .collect::<suture::Result<Vec<_>>>()?;
    Ok(AssetGroup::new(name, fragments, extract_dir))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let chrome_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resources/chrome"));
    let firefox_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resources/firefox"));

    let groups = vec![
        build_group("chrome", CHROME_FRAGMENTS, chrome_dir)?,
        build_group("firefox", FIREFOX_FRAGMENTS, firefox_dir)?,
    ];

    let fetcher = FetcherBuilder::new().retries(3).build();
    let reports = Pipeline::new(fetcher, groups).run().await;

    for report in &reports {
        println!("{}: {:?}", report.name(), report.status());
    }
    if reports.iter().all(|r| r.is_complete()) {
        println!("All bundles downloaded and extracted successfully.");
    }

    Ok(())
}
