use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use suture::FragmentSpec;
use tempfile::TempDir;

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a file with the given content inside a directory
pub fn write_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&file_path, content).expect("Failed to write file");
    file_path
}

/// Hex-encoded SHA-256 digest of a byte slice
pub fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Creates a fragment spec whose URL points at a closed local port.
///
/// The checksum matches `content`, so a file seeded on disk with that content
/// verifies without any network access, while an actual download attempt
/// fails immediately with a connection error.
pub fn unroutable_spec(filename: &str, content: &[u8]) -> FragmentSpec {
    let url = format!("http://127.0.0.1:1/{}", filename);
    FragmentSpec::from_parts(&url, &sha256_hex(content)).expect("Failed to create fragment spec")
}

/// Splits bytes into `parts` nearly equal consecutive chunks
pub fn split_bytes(content: &[u8], parts: usize) -> Vec<Vec<u8>> {
    let chunk = content.len().div_ceil(parts);
    content
        .chunks(chunk.max(1))
        .map(|c| c.to_vec())
        .collect()
}

/// Builds a minimal ZIP archive with stored (uncompressed) entries.
///
/// Entry names ending in '/' become directory entries and should carry empty
/// data.
pub fn build_stored_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let with_methods: Vec<(&str, &[u8], bool)> =
        entries.iter().map(|(name, data)| (*name, *data, false)).collect();
    build_zip(&with_methods)
}

/// Builds a minimal ZIP archive, optionally deflate-compressing entries.
///
/// Each entry is `(name, data, deflate)`.
pub fn build_zip(entries: &[(&str, &[u8], bool)]) -> Vec<u8> {
    let mut archive = Vec::new();
    let mut central = Vec::new();

    for &(name, data, deflate) in entries {
        let crc = {
            let mut crc = flate2::Crc::new();
            crc.update(data);
            crc.sum()
        };
        let (method, payload): (u16, Vec<u8>) = if deflate {
            let mut encoder = flate2::write::DeflateEncoder::new(
                Vec::new(),
                flate2::Compression::default(),
            );
            encoder.write_all(data).unwrap();
            (8, encoder.finish().unwrap())
        } else {
            (0, data.to_vec())
        };
        let offset = archive.len() as u32;

        // Local file header
        archive.extend_from_slice(b"\x50\x4b\x03\x04");
        archive.extend_from_slice(&20u16.to_le_bytes()); // version needed
        archive.extend_from_slice(&0u16.to_le_bytes()); // flags
        archive.extend_from_slice(&method.to_le_bytes());
        archive.extend_from_slice(&0u16.to_le_bytes()); // mod time
        archive.extend_from_slice(&0u16.to_le_bytes()); // mod date
        archive.extend_from_slice(&crc.to_le_bytes());
        archive.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        archive.extend_from_slice(&(data.len() as u32).to_le_bytes());
        archive.extend_from_slice(&(name.len() as u16).to_le_bytes());
        archive.extend_from_slice(&0u16.to_le_bytes()); // extra field length
        archive.extend_from_slice(name.as_bytes());
        archive.extend_from_slice(&payload);

        // Central directory entry
        central.extend_from_slice(b"\x50\x4b\x01\x02");
        central.extend_from_slice(&20u16.to_le_bytes()); // version made by
        central.extend_from_slice(&20u16.to_le_bytes()); // version needed
        central.extend_from_slice(&0u16.to_le_bytes()); // flags
        central.extend_from_slice(&method.to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes()); // mod time
        central.extend_from_slice(&0u16.to_le_bytes()); // mod date
        central.extend_from_slice(&crc.to_le_bytes());
        central.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        central.extend_from_slice(&(data.len() as u32).to_le_bytes());
        central.extend_from_slice(&(name.len() as u16).to_le_bytes());
        central.extend_from_slice(&0u16.to_le_bytes()); // extra field length
        central.extend_from_slice(&0u16.to_le_bytes()); // comment length
        central.extend_from_slice(&0u16.to_le_bytes()); // disk number start
        central.extend_from_slice(&0u16.to_le_bytes()); // internal attributes
        central.extend_from_slice(&0u32.to_le_bytes()); // external attributes
        central.extend_from_slice(&offset.to_le_bytes());
        central.extend_from_slice(name.as_bytes());
    }

    let cd_offset = archive.len() as u32;
    let cd_size = central.len() as u32;
    archive.extend_from_slice(&central);

    // End of central directory record
    archive.extend_from_slice(b"\x50\x4b\x05\x06");
    archive.extend_from_slice(&0u16.to_le_bytes()); // disk number
    archive.extend_from_slice(&0u16.to_le_bytes()); // central directory disk
    archive.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    archive.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    archive.extend_from_slice(&cd_size.to_le_bytes());
    archive.extend_from_slice(&cd_offset.to_le_bytes());
    archive.extend_from_slice(&0u16.to_le_bytes()); // comment length

    archive
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that a file exists with exactly the given content
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let actual = fs::read(path).expect("Failed to read file");
    assert_eq!(actual, expected, "Content mismatch at path: {:?}", path);
}
