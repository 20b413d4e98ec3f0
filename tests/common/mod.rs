//! Hand-rolled ZIP archive builder for test fixtures.
//!
//! Writes local file headers, payloads, central directory records and
//! the end-of-central-directory record directly, so tests control every
//! byte of the fixture.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};
use std::io::Write;
use std::path::PathBuf;

pub const STORE: u16 = 0;
pub const DEFLATE: u16 = 8;

pub struct ArchiveBuilder {
    data: Vec<u8>,
    directory: Vec<u8>,
    count: u16,
    comment: Vec<u8>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            directory: Vec::new(),
            count: 0,
            comment: Vec::new(),
        }
    }

    pub fn comment(mut self, comment: &[u8]) -> Self {
        self.comment = comment.to_vec();
        self
    }

    pub fn entry(self, name: &str, contents: &[u8], method: u16) -> Self {
        let crc = crc32(contents);
        self.entry_with_stored_crc(name, contents, method, crc)
    }

    /// Add an entry with an explicit CRC-32 in its headers, which may
    /// deliberately disagree with the payload.
    pub fn entry_with_stored_crc(
        mut self,
        name: &str,
        contents: &[u8],
        method: u16,
        crc: u32,
    ) -> Self {
        let compressed = match method {
            DEFLATE => {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(contents).unwrap();
                encoder.finish().unwrap()
            }
            // STORE and unknown methods carry the payload verbatim
            _ => contents.to_vec(),
        };
        let lfh_offset = self.data.len() as u32;

        let d = &mut self.data;
        d.extend_from_slice(b"PK\x03\x04");
        d.write_u16::<LittleEndian>(20).unwrap(); // version needed
        d.write_u16::<LittleEndian>(0).unwrap(); // flags
        d.write_u16::<LittleEndian>(method).unwrap();
        d.write_u16::<LittleEndian>(0).unwrap(); // mod time
        d.write_u16::<LittleEndian>(0).unwrap(); // mod date
        d.write_u32::<LittleEndian>(crc).unwrap();
        d.write_u32::<LittleEndian>(compressed.len() as u32).unwrap();
        d.write_u32::<LittleEndian>(contents.len() as u32).unwrap();
        d.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        d.write_u16::<LittleEndian>(0).unwrap(); // extra len
        d.extend_from_slice(name.as_bytes());
        d.extend_from_slice(&compressed);

        let c = &mut self.directory;
        c.extend_from_slice(b"PK\x01\x02");
        c.write_u16::<LittleEndian>(20).unwrap(); // version made by
        c.write_u16::<LittleEndian>(20).unwrap(); // version needed
        c.write_u16::<LittleEndian>(0).unwrap(); // flags
        c.write_u16::<LittleEndian>(method).unwrap();
        c.write_u16::<LittleEndian>(0).unwrap(); // mod time
        c.write_u16::<LittleEndian>(0).unwrap(); // mod date
        c.write_u32::<LittleEndian>(crc).unwrap();
        c.write_u32::<LittleEndian>(compressed.len() as u32).unwrap();
        c.write_u32::<LittleEndian>(contents.len() as u32).unwrap();
        c.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        c.write_u16::<LittleEndian>(0).unwrap(); // extra len
        c.write_u16::<LittleEndian>(0).unwrap(); // comment len
        c.write_u16::<LittleEndian>(0).unwrap(); // disk start
        c.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        c.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        c.write_u32::<LittleEndian>(lfh_offset).unwrap();
        c.extend_from_slice(name.as_bytes());

        self.count += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = self.data;
        let cd_offset = out.len() as u32;
        out.extend_from_slice(&self.directory);
        let cd_size = out.len() as u32 - cd_offset;

        out.extend_from_slice(b"PK\x05\x06");
        out.write_u16::<LittleEndian>(0).unwrap(); // disk number
        out.write_u16::<LittleEndian>(0).unwrap(); // disk with cd
        out.write_u16::<LittleEndian>(self.count).unwrap();
        out.write_u16::<LittleEndian>(self.count).unwrap();
        out.write_u32::<LittleEndian>(cd_size).unwrap();
        out.write_u32::<LittleEndian>(cd_offset).unwrap();
        out.write_u16::<LittleEndian>(self.comment.len() as u16)
            .unwrap();
        out.extend_from_slice(&self.comment);
        out
    }

    /// Finish the archive with a ZIP64 EOCD record and locator, and a
    /// regular EOCD whose fields are saturated to the ZIP64 sentinels.
    pub fn build_zip64(self) -> Vec<u8> {
        let count = self.count;
        let mut out = self.data;
        let cd_offset = out.len() as u64;
        out.extend_from_slice(&self.directory);
        let cd_size = out.len() as u64 - cd_offset;
        let eocd64_offset = out.len() as u64;

        // ZIP64 end of central directory record
        out.extend_from_slice(b"PK\x06\x06");
        out.write_u64::<LittleEndian>(44).unwrap(); // remaining record size
        out.write_u16::<LittleEndian>(45).unwrap(); // version made by
        out.write_u16::<LittleEndian>(45).unwrap(); // version needed
        out.write_u32::<LittleEndian>(0).unwrap(); // disk number
        out.write_u32::<LittleEndian>(0).unwrap(); // disk with cd
        out.write_u64::<LittleEndian>(count as u64).unwrap();
        out.write_u64::<LittleEndian>(count as u64).unwrap();
        out.write_u64::<LittleEndian>(cd_size).unwrap();
        out.write_u64::<LittleEndian>(cd_offset).unwrap();

        // ZIP64 end of central directory locator
        out.extend_from_slice(b"PK\x06\x07");
        out.write_u32::<LittleEndian>(0).unwrap(); // disk with eocd64
        out.write_u64::<LittleEndian>(eocd64_offset).unwrap();
        out.write_u32::<LittleEndian>(1).unwrap(); // total disks

        // Saturated regular EOCD
        out.extend_from_slice(b"PK\x05\x06");
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0xFFFF).unwrap();
        out.write_u16::<LittleEndian>(0xFFFF).unwrap();
        out.write_u32::<LittleEndian>(0xFFFF_FFFF).unwrap();
        out.write_u32::<LittleEndian>(0xFFFF_FFFF).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out
    }
}

pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(data);
    crc.sum()
}

/// The archive from the reference scenario: `a.txt` ("hello", stored)
/// and `b/c.txt` ("world!!!", deflated).
pub fn sample_archive() -> Vec<u8> {
    ArchiveBuilder::new()
        .entry("a.txt", b"hello", STORE)
        .entry("b/c.txt", b"world!!!", DEFLATE)
        .build()
}

/// Per-test scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("munzip-test-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
