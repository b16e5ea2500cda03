//! Fragment assembly implementation.
//!
//! This module concatenates the verified fragments of one group back into the
//! single archive they were split from. Fragments are streamed into the output
//! in specification order, so the result is byte-for-byte the original file.

use crate::error::{Error, Result};
use crate::fragment::checksum::digest_file;
use crate::fragment::LocalFragment;

use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::{self, AsyncWriteExt};
use tracing::debug;

/// Concatenate verified fragments, in order, into one combined archive.
///
/// The output file is created exclusively; an existing file at `output` is an
/// error, which keeps an interrupted run from silently appending to a stale
/// archive. Each fragment's digest is checked again immediately before it is
/// copied, so a file modified between fetch and assembly can never reach the
/// combined archive. Returns the number of bytes written.
///
/// Any I/O failure is fatal: a partially written combined archive is never
/// usable and the caller must not fall back to it.
pub async fn assemble(fragments: &[LocalFragment], output: &Path) -> Result<u64> {
    let mut combined = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(output)
        .await?;

    let mut total: u64 = 0;
    for fragment in fragments {
        let actual = digest_file(fragment.path())?;
        if !actual.eq_ignore_ascii_case(&fragment.spec().checksum) {
            return Err(Error::ChecksumMismatch {
                path: fragment.path().to_path_buf(),
                expected: fragment.spec().checksum.clone(),
                actual,
            });
        }

        debug!(
            part = %fragment.path().display(),
            "appending fragment to combined archive"
        );
        let mut part = File::open(fragment.path()).await?;
        total += io::copy(&mut part, &mut combined).await?;
    }
    combined.flush().await?;

    debug!(bytes = total, archive = %output.display(), "fragments assembled");
    Ok(total)
}
