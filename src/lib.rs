//! # munzip
//!
//! A minimal unzip utility for listing and extracting entries from ZIP
//! archives.
//!
//! The library implements the small ZIP-reading engine behind the CLI:
//! it locates the end-of-central-directory record, parses the central
//! directory into an ordered entry list, and extracts single entries
//! with local-header validation and CRC-32 verification. STORED and
//! DEFLATE payloads are supported; inflate and checksums come from
//! `flate2`.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use munzip::{LocalFileReader, ZipArchive};
//!
//! fn main() -> anyhow::Result<()> {
//!     let reader = LocalFileReader::new(Path::new("archive.zip"))?;
//!     let archive = ZipArchive::open(reader)?;
//!
//!     // List all entries in the archive
//!     for entry in archive.entries() {
//!         println!("{}", entry.file_name);
//!     }
//!
//!     // Extract one entry, verifying its CRC-32
//!     let entry = archive.find("docs/readme.txt")?;
//!     archive.extract_to_file(entry, Path::new("readme.txt"))?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod zip;

pub use cli::{Action, Cli};
pub use error::{Result, ZipError};
pub use io::{LocalFileReader, ReadAt};
pub use zip::{CompressionMethod, ZipArchive, ZipFileEntry};
