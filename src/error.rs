//! Error types shared by the whole crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZipError>;

/// Everything that can go wrong while reading a ZIP archive.
///
/// The taxonomy is deliberately small:
///
/// - [`Io`](ZipError::Io): the archive or the output file could not be
///   read or written.
/// - [`Format`](ZipError::Format): the bytes violate the ZIP format, or
///   use a feature this crate does not support.
/// - [`NotFound`](ZipError::NotFound): the requested entry is absent
///   from the central directory.
/// - [`Integrity`](ZipError::Integrity): decompression succeeded but the
///   payload does not match its stored CRC-32.
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid zip data: {0}")]
    Format(String),

    #[error("entry not found in archive: {0}")]
    NotFound(String),

    #[error("crc32 mismatch for {name}: stored {stored:#010x}, computed {computed:#010x}")]
    Integrity {
        name: String,
        stored: u32,
        computed: u32,
    },
}

impl ZipError {
    /// Shorthand for building a [`ZipError::Format`].
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        ZipError::Format(msg.into())
    }
}
