//! ZIP file extraction implementation.
//!
//! This module unpacks a local ZIP archive into a destination directory by
//! parsing the End of Central Directory record and central directory by hand,
//! then streaming each entry out with seek + bounded reads.

use crate::error::{Error, Result};

use flate2::read::DeflateDecoder;
use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

const EOCD_SIGNATURE: &[u8; 4] = b"\x50\x4b\x05\x06";
const CENTRAL_DIR_SIGNATURE: &[u8; 4] = b"\x50\x4b\x01\x02";
const LOCAL_HEADER_SIGNATURE: &[u8; 4] = b"\x50\x4b\x03\x04";

const COMPRESSION_STORED: u16 = 0;
const COMPRESSION_DEFLATE: u16 = 8;

const EOCD_MIN_SIZE: usize = 22;
const CENTRAL_DIR_ENTRY_MIN_SIZE: usize = 46;
const LOCAL_HEADER_MIN_SIZE: usize = 30;

const EOCD_SEARCH_SIZE: u64 = 65536;

/// Information about a file within a ZIP archive.
#[derive(Debug, Clone)]
pub struct ZipEntry {
    pub name: String,
    pub compression_method: u16,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub local_header_offset: u64,
}

impl ZipEntry {
    /// Directory entries are stored with a trailing slash.
    pub fn is_dir(&self) -> bool {
        self.name.ends_with('/')
    }
}

/// Unpack every entry of `archive` into `dest_dir`, then delete the archive.
///
/// The destination directory is created recursively if absent and entry paths
/// are preserved relative to it. On any failure the archive file is left on
/// disk so the operator can inspect it. Returns the number of file entries
/// written.
pub fn extract(archive: &Path, dest_dir: &Path) -> Result<usize> {
    fs::create_dir_all(dest_dir)?;
    info!(
        archive = %archive.display(),
        dest = %dest_dir.display(),
        "extracting archive"
    );

    let mut file = File::open(archive)?;
    let entries = read_central_directory(&mut file)?;

    let mut extracted = 0;
    for entry in &entries {
        let target = sanitize_entry_path(dest_dir, &entry.name)?;
        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        write_entry(&mut file, entry, &target)?;
        extracted += 1;
    }

    fs::remove_file(archive)?;
    debug!(entries = extracted, "archive extracted and removed");
    Ok(extracted)
}

/// Locate the EOCD record and read the full central directory.
fn read_central_directory(file: &mut File) -> Result<Vec<ZipEntry>> {
    let archive_size = file.metadata()?.len();
    if archive_size < EOCD_MIN_SIZE as u64 {
        return Err(Error::Archive {
            message: "Archive too small to contain an End of Central Directory record".into(),
            cause: None,
        });
    }

    let tail_size = EOCD_SEARCH_SIZE.min(archive_size);
    let tail_start = archive_size - tail_size;
    file.seek(SeekFrom::Start(tail_start))?;
    let mut tail = vec![0u8; tail_size as usize];
    file.read_exact(&mut tail)?;

    let eocd_offset = tail
        .windows(4)
        .rposition(|window| window == EOCD_SIGNATURE)
        .ok_or_else(|| Error::Archive {
            message: "Could not find End of Central Directory Record".into(),
            cause: None,
        })?;

    let eocd = &tail[eocd_offset..];
    if eocd.len() < EOCD_MIN_SIZE {
        return Err(Error::Archive {
            message: "Invalid EOCD record".into(),
            cause: None,
        });
    }

    let cd_size = u32::from_le_bytes([eocd[12], eocd[13], eocd[14], eocd[15]]) as u64;
    let cd_offset = u32::from_le_bytes([eocd[16], eocd[17], eocd[18], eocd[19]]) as u64;
    if cd_offset + cd_size > archive_size {
        return Err(Error::Archive {
            message: "Central directory extends past the end of the archive".into(),
            cause: None,
        });
    }

    file.seek(SeekFrom::Start(cd_offset))?;
    let mut cd_data = vec![0u8; cd_size as usize];
    file.read_exact(&mut cd_data)?;

    parse_central_directory(&cd_data)
}

/// Parse central directory bytes into the full entry list.
fn parse_central_directory(cd_data: &[u8]) -> Result<Vec<ZipEntry>> {
    let mut entries = Vec::new();
    let mut offset = 0;

    while offset + CENTRAL_DIR_ENTRY_MIN_SIZE <= cd_data.len() {
        if &cd_data[offset..offset + 4] != CENTRAL_DIR_SIGNATURE {
            break;
        }

        let compression_method = u16::from_le_bytes([cd_data[offset + 10], cd_data[offset + 11]]);
        let compressed_size = u32::from_le_bytes([
            cd_data[offset + 20],
            cd_data[offset + 21],
            cd_data[offset + 22],
            cd_data[offset + 23],
        ]) as u64;
        let uncompressed_size = u32::from_le_bytes([
            cd_data[offset + 24],
            cd_data[offset + 25],
            cd_data[offset + 26],
            cd_data[offset + 27],
        ]) as u64;
        let filename_length =
            u16::from_le_bytes([cd_data[offset + 28], cd_data[offset + 29]]) as usize;
        let extra_field_length =
            u16::from_le_bytes([cd_data[offset + 30], cd_data[offset + 31]]) as usize;
        let comment_length =
            u16::from_le_bytes([cd_data[offset + 32], cd_data[offset + 33]]) as usize;
        let local_header_offset = u32::from_le_bytes([
            cd_data[offset + 42],
            cd_data[offset + 43],
            cd_data[offset + 44],
            cd_data[offset + 45],
        ]) as u64;

        let filename_start = offset + CENTRAL_DIR_ENTRY_MIN_SIZE;
        if filename_start + filename_length > cd_data.len() {
            break;
        }

        let name =
            String::from_utf8_lossy(&cd_data[filename_start..filename_start + filename_length])
                .into_owned();

        entries.push(ZipEntry {
            name,
            compression_method,
            compressed_size,
            uncompressed_size,
            local_header_offset,
        });

        offset += CENTRAL_DIR_ENTRY_MIN_SIZE + filename_length + extra_field_length + comment_length;
    }

    if entries.is_empty() && !cd_data.is_empty() {
        return Err(Error::Archive {
            message: "Central directory contains no parseable entries".into(),
            cause: None,
        });
    }

    Ok(entries)
}

/// Stream one entry's data out of the archive into `target`.
fn write_entry(file: &mut File, entry: &ZipEntry, target: &Path) -> Result<()> {
    file.seek(SeekFrom::Start(entry.local_header_offset))?;
    let mut header = [0u8; LOCAL_HEADER_MIN_SIZE];
    file.read_exact(&mut header)?;

    if &header[0..4] != LOCAL_HEADER_SIGNATURE {
        return Err(Error::Archive {
            message: format!("Invalid local file header for '{}'", entry.name),
            cause: None,
        });
    }

    let filename_length = u16::from_le_bytes([header[26], header[27]]) as u64;
    let extra_field_length = u16::from_le_bytes([header[28], header[29]]) as u64;
    let data_start =
        entry.local_header_offset + LOCAL_HEADER_MIN_SIZE as u64 + filename_length + extra_field_length;

    file.seek(SeekFrom::Start(data_start))?;
    let mut raw = file.by_ref().take(entry.compressed_size);
    let mut output = File::create(target)?;

    match entry.compression_method {
        COMPRESSION_STORED => {
            io::copy(&mut raw, &mut output)?;
        }
        COMPRESSION_DEFLATE => {
            let mut decoder = DeflateDecoder::new(&mut raw);
            io::copy(&mut decoder, &mut output).map_err(|e| Error::Archive {
                message: format!("Deflate decompression failed for '{}'", entry.name),
                cause: Some(Box::new(e)),
            })?;
        }
        method => {
            return Err(Error::UnsupportedCompression { method });
        }
    }

    Ok(())
}

/// Resolve an entry name under the destination, rejecting escapes.
fn sanitize_entry_path(dest_dir: &Path, name: &str) -> Result<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            _ => {
                return Err(Error::Archive {
                    message: format!("Entry '{}' escapes the destination directory", name),
                    cause: None,
                });
            }
        }
    }
    Ok(dest_dir.join(clean))
}
