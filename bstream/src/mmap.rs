//! Memory-mapped file backend for binary streams
//!
//! Maps a file into memory and hands out borrowed-view readers over the
//! mapping, so large on-disk captures can be decoded without copying
//! them into an owned buffer first.

use bstream_core::{Endianness, ReadOnlyStream};
use memmap2::Mmap;
use std::{fs::File, io, path::Path};

/// A file mapped into memory that readers can borrow from
///
/// Every reader handed out by [`stream`](Self::stream) borrows the
/// mapping, so it can never outlive the `MappedStream` that owns it.
#[derive(Debug)]
pub struct MappedStream {
    mmap: Mmap,
    endian: Endianness,
}

impl MappedStream {
    /// Map `path` read-only with the default little-endian byte order
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with_endianness(path, Endianness::Little)
    }

    /// Map `path` read-only with an explicit byte order
    pub fn open_with_endianness(path: impl AsRef<Path>, endian: Endianness) -> io::Result<Self> {
        let file = File::open(path)?;
        // Safety: the mapping is read-only and lives as long as `self`;
        // the caller must not truncate the file while it is mapped.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap, endian })
    }

    /// Length of the mapped file in bytes
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// True when the mapped file is empty
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// The mapped bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    /// A fresh reader borrowing the whole mapping
    pub fn stream(&self) -> ReadOnlyStream<'_> {
        ReadOnlyStream::with_endianness(&self.mmap[..], self.endian)
    }
}
