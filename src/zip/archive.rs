use flate2::Crc;
use flate2::read::DeflateDecoder;
use log::debug;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Result, ZipError};
use crate::io::ReadAt;

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// An opened ZIP archive.
///
/// Parses the central directory once at open time and owns the
/// resulting entry list; the snapshot does not track later mutation of
/// the underlying file. The byte source stays open for the lifetime of
/// the archive so entries can be extracted at any point.
pub struct ZipArchive<R: ReadAt> {
    parser: ZipParser<R>,
    entries: Vec<ZipFileEntry>,
}

impl<R: ReadAt> ZipArchive<R> {
    /// Open an archive over the given byte source.
    ///
    /// # Errors
    ///
    /// Returns [`ZipError::Io`] if the source cannot be read and
    /// [`ZipError::Format`] if it is not a valid ZIP archive.
    pub fn open(reader: R) -> Result<Self> {
        let parser = ZipParser::new(reader);
        let entries = parser.read_central_directory()?;
        Ok(Self { parser, entries })
    }

    /// All entries, in central directory order.
    pub fn entries(&self) -> &[ZipFileEntry] {
        &self.entries
    }

    /// Find an entry by its archive-relative path.
    ///
    /// The comparison is byte-for-byte against the stored name. The
    /// format does not forbid duplicate names; the first match in
    /// directory order wins.
    pub fn find(&self, name: &str) -> Result<&ZipFileEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name_raw == name.as_bytes())
            .ok_or_else(|| ZipError::NotFound(name.to_string()))
    }

    /// Read and verify an entry's contents into memory.
    ///
    /// Validates the local file header against the central directory,
    /// decompresses the payload (Store or Deflate), checks the
    /// decompressed length and compares the CRC-32 against the stored
    /// value.
    ///
    /// # Errors
    ///
    /// [`ZipError::Format`] for an unsupported method, a bad local
    /// header or a length mismatch; [`ZipError::Integrity`] when the
    /// CRC-32 does not match.
    pub fn read(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        let data_offset = self.parser.local_data_offset(entry)?;

        // The payload must lie within the file; a corrupt directory
        // must not drive allocation or reads past the end.
        match data_offset.checked_add(entry.compressed_size) {
            Some(end) if end <= self.parser.source_size() => {}
            _ => {
                return Err(ZipError::Format(format!(
                    "entry data extends past end of archive for {}",
                    entry.file_name
                )));
            }
        }

        let mut compressed = vec![0u8; entry.compressed_size as usize];
        self.parser.reader().read_exact_at(data_offset, &mut compressed)?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => compressed,
            CompressionMethod::Deflate => {
                let decoder = DeflateDecoder::new(compressed.as_slice());
                let mut data = Vec::new();
                // Cap the output so a lying directory entry cannot force
                // unbounded decompression; the length check below turns
                // an overrun into an error.
                decoder
                    .take(entry.uncompressed_size.saturating_add(1))
                    .read_to_end(&mut data)
                    .map_err(|err| {
                        ZipError::Format(format!(
                            "inflate failed for {}: {err}",
                            entry.file_name
                        ))
                    })?;
                data
            }
            CompressionMethod::Unknown(method) => {
                return Err(ZipError::Format(format!(
                    "unsupported compression method {method} for {}",
                    entry.file_name
                )));
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            return Err(ZipError::Format(format!(
                "decompressed size {} does not match directory size {} for {}",
                data.len(),
                entry.uncompressed_size,
                entry.file_name
            )));
        }

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            return Err(ZipError::Integrity {
                name: entry.file_name.clone(),
                stored: entry.crc32,
                computed: crc.sum(),
            });
        }

        debug!(
            "read {}: {} -> {} bytes",
            entry.file_name, entry.compressed_size, entry.uncompressed_size
        );

        Ok(data)
    }

    /// Extract an entry to a file on disk.
    ///
    /// The payload is decoded and verified in memory first, so a format
    /// or integrity failure creates no output file. The output is
    /// created (or truncated) only once verification has passed; a
    /// failed write after that point leaves the partial file in place.
    pub fn extract_to_file(&self, entry: &ZipFileEntry, output_path: &Path) -> Result<()> {
        let data = self.read(entry)?;

        // Create parent directories if needed
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = fs::File::create(output_path)?;
        file.write_all(&data)?;

        Ok(())
    }
}
