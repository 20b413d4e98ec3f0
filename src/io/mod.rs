mod local;

pub use local::LocalFileReader;

/// Trait for random access reading from an archive byte source.
///
/// ZIP archives are read from the end (end of central directory first),
/// so the reader must support positioned reads rather than sequential
/// streaming.
pub trait ReadAt {
    /// Fill `buf` completely with data starting at `offset`.
    ///
    /// Fails with [`std::io::ErrorKind::UnexpectedEof`] if the source
    /// ends before `buf` is full.
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<()>;

    /// Get the total size of the data source.
    fn size(&self) -> u64;
}

/// In-memory byte sources, mainly useful for tests and fixtures.
impl ReadAt for &[u8] {
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> std::io::Result<()> {
        let start = usize::try_from(offset)
            .ok()
            .filter(|start| *start <= self.len())
            .ok_or(std::io::ErrorKind::UnexpectedEof)?;
        let end = start
            .checked_add(buf.len())
            .filter(|end| *end <= self.len())
            .ok_or(std::io::ErrorKind::UnexpectedEof)?;
        buf.copy_from_slice(&self[start..end]);
        Ok(())
    }

    fn size(&self) -> u64 {
        self.len() as u64
    }
}
