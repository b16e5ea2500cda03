//! Archive assembly and extraction functionality.
//!
//! This module turns the verified fragments of a group back into a usable
//! resource tree: [`assemble`] concatenates them into the original archive,
//! and [`extract`] unpacks that archive into a destination directory.

pub mod assemble;
pub mod zip;

pub use assemble::assemble;
pub use zip::{extract, ZipEntry};
