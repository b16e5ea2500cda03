//! End-to-end pipeline tests.
//!
//! All scenarios run offline: download directories are pre-seeded so valid
//! fragments take the skip-if-valid path, and missing fragments point at a
//! closed local port so their downloads fail deterministically.

use std::path::PathBuf;
use std::time::Duration;

use suture::{AssetGroup, FetcherBuilder, FragmentSpec, GroupStatus, Pipeline, Status};

mod common;
use common::helpers::*;

fn test_fetcher() -> suture::Fetcher {
    FetcherBuilder::new()
        .retries(2)
        .retry_delay(Duration::from_millis(10))
        .build()
}

/// Builds a group over `parts`, seeding the fragments listed in `seed` into
/// the download directory.
fn seeded_group(
    name: &str,
    parts: &[Vec<u8>],
    seed: &[usize],
    download_dir: PathBuf,
    extract_dir: PathBuf,
) -> AssetGroup {
    let specs: Vec<FragmentSpec> = parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let filename = format!("{}.zip.{:03}", name, i + 1);
            if seed.contains(&i) {
                write_file(&download_dir, &filename, part);
            }
            unroutable_spec(&filename, part)
        })
        .collect();
    AssetGroup::new(name, specs, extract_dir).with_download_dir(download_dir)
}

/// All fragments valid on disk: the group assembles, extracts, and cleans up
/// its download directory.
#[tokio::test]
async fn test_group_completes_from_seeded_fragments() {
    let temp_dir = create_temp_dir();
    let download_dir = temp_dir.path().join("tool_downloads");
    let extract_dir = temp_dir.path().join("resources/tool");

    let archive_bytes = build_stored_zip(&[
        ("bundle/tool.txt", b"tool payload"),
        ("bundle/data.bin", b"\x00\x01\x02\x03"),
    ]);
    let parts = split_bytes(&archive_bytes, 4);
    let group = seeded_group(
        "tool",
        &parts,
        &[0, 1, 2, 3],
        download_dir.clone(),
        extract_dir.clone(),
    );

    let reports = Pipeline::new(test_fetcher(), vec![group]).run().await;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].status(), &GroupStatus::Complete);
    assert_eq!(reports[0].summaries().len(), 4);
    for summary in reports[0].summaries() {
        assert!(matches!(summary.status(), Status::Skipped(_)));
    }

    assert_file_content(&extract_dir.join("bundle/tool.txt"), b"tool payload");
    assert_file_content(&extract_dir.join("bundle/data.bin"), b"\x00\x01\x02\x03");
    // Temporary artifacts are gone after success.
    assert!(!download_dir.exists());
}

/// One unfetchable fragment keeps the group from assembling, while the valid
/// fragments stay on disk for a future run and other groups still complete.
#[tokio::test]
async fn test_incomplete_group_does_not_block_others() {
    let temp_dir = create_temp_dir();
    let broken_downloads = temp_dir.path().join("broken_downloads");
    let broken_extract = temp_dir.path().join("resources/broken");
    let intact_downloads = temp_dir.path().join("intact_downloads");
    let intact_extract = temp_dir.path().join("resources/intact");

    let broken_bytes = build_stored_zip(&[("bundle/never.txt", b"never extracted")]);
    let broken_parts = split_bytes(&broken_bytes, 4);
    // Fragment 3 is neither seeded nor downloadable.
    let broken_group = seeded_group(
        "broken",
        &broken_parts,
        &[0, 1, 3],
        broken_downloads.clone(),
        broken_extract.clone(),
    );

    let intact_bytes = build_stored_zip(&[("bundle/ok.txt", b"extracted fine")]);
    let intact_parts = split_bytes(&intact_bytes, 2);
    let intact_group = seeded_group(
        "intact",
        &intact_parts,
        &[0, 1],
        intact_downloads.clone(),
        intact_extract.clone(),
    );

    let reports = Pipeline::new(test_fetcher(), vec![broken_group, intact_group])
        .run()
        .await;

    assert_eq!(reports.len(), 2);
    assert_eq!(
        reports[0].status(),
        &GroupStatus::Incomplete {
            verified: 3,
            expected: 4
        }
    );
    assert_eq!(reports[1].status(), &GroupStatus::Complete);

    // No assembly or extraction happened for the broken group.
    assert!(!broken_downloads.join("broken_combined.zip").exists());
    assert!(!broken_extract.exists());
    // Valid fragments remain for resumption.
    assert!(broken_downloads.join("broken.zip.001").exists());
    assert!(broken_downloads.join("broken.zip.002").exists());
    assert!(broken_downloads.join("broken.zip.004").exists());

    // The unrelated group extracted and cleaned up normally.
    assert_file_content(&intact_extract.join("bundle/ok.txt"), b"extracted fine");
    assert!(!intact_downloads.exists());

    // The incomplete report converts into the matching error.
    assert!(matches!(
        reports[0].clone().into_result(),
        Err(suture::Error::IncompleteGroup { .. })
    ));
}

/// Verified fragments that do not form a readable archive fail the group at
/// extraction, preserving the combined archive for inspection.
#[tokio::test]
async fn test_unreadable_archive_fails_group_and_keeps_artifacts() {
    let temp_dir = create_temp_dir();
    let download_dir = temp_dir.path().join("junk_downloads");
    let extract_dir = temp_dir.path().join("resources/junk");

    // Checksums match, but the concatenation is not a ZIP archive.
    let junk = b"garbage bytes that do not form an archive".to_vec();
    let parts = split_bytes(&junk, 2);
    let group = seeded_group(
        "junk",
        &parts,
        &[0, 1],
        download_dir.clone(),
        extract_dir.clone(),
    );

    let reports = Pipeline::new(test_fetcher(), vec![group]).run().await;

    assert_eq!(reports.len(), 1);
    assert!(matches!(reports[0].status(), GroupStatus::Failed(_)));
    // The combined archive and the download directory survive the failure.
    assert!(download_dir.join("junk_combined.zip").exists());
    assert!(download_dir.join("junk.zip.001").exists());
}

/// A stale combined archive left by an interrupted run is replaced, not
/// appended to.
#[tokio::test]
async fn test_stale_combined_archive_is_replaced() {
    let temp_dir = create_temp_dir();
    let download_dir = temp_dir.path().join("tool_downloads");
    let extract_dir = temp_dir.path().join("resources/tool");

    let archive_bytes = build_stored_zip(&[("bundle/fresh.txt", b"fresh content")]);
    let parts = split_bytes(&archive_bytes, 2);
    let group = seeded_group(
        "tool",
        &parts,
        &[0, 1],
        download_dir.clone(),
        extract_dir.clone(),
    );
    write_file(&download_dir, "tool_combined.zip", b"stale leftover");

    let reports = Pipeline::new(test_fetcher(), vec![group]).run().await;

    assert_eq!(reports[0].status(), &GroupStatus::Complete);
    assert_file_content(&extract_dir.join("bundle/fresh.txt"), b"fresh content");
    assert!(!download_dir.exists());
}
