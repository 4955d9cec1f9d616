//! Bridges between binary streams and `std::io`

use bstream_core::{BinaryStream, ReadOnlyStream};
use std::io::{self, Read, Write};

/// Adapter that drains a [`ReadOnlyStream`]'s remaining view through
/// `std::io::Read`
#[derive(Debug)]
pub struct StreamReader<'a> {
    stream: ReadOnlyStream<'a>,
}

impl<'a> StreamReader<'a> {
    /// Wrap a stream for `std::io::Read` access
    pub fn new(stream: ReadOnlyStream<'a>) -> Self {
        Self { stream }
    }

    /// Recover the wrapped stream
    pub fn into_inner(self) -> ReadOnlyStream<'a> {
        self.stream
    }
}

impl Read for StreamReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.stream.is_overflowed() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "binary stream has overflowed",
            ));
        }
        let remaining = self.stream.remaining_slice();
        let count = remaining.len().min(buf.len());
        buf[..count].copy_from_slice(&remaining[..count]);
        self.stream.ignore_bytes(count);
        Ok(count)
    }
}

/// Adapter that appends to a [`BinaryStream`] through `std::io::Write`
#[derive(Debug)]
pub struct StreamWriter<'a> {
    stream: BinaryStream<'a>,
}

impl<'a> StreamWriter<'a> {
    /// Wrap a writer for `std::io::Write` access
    pub fn new(stream: BinaryStream<'a>) -> Self {
        Self { stream }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> BinaryStream<'a> {
        self.stream
    }
}

impl Write for StreamWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
