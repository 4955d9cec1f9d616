//! Read-only cursor over a binary stream buffer
//!
//! Decoding never panics and never reads out of bounds: a read past the
//! end of the buffer fails, latches a sticky overflow flag, and leaves
//! the cursor where it was. Callers can check each decode with `?` or
//! decode a whole sequence and batch-check
//! [`is_overflowed`](ReadOnlyStream::is_overflowed) once at the end.

use crate::endian::Endianness;
use crate::error::{Result, StreamError};
use crate::varint;
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// Read-only cursor over an owned or borrowed byte buffer
///
/// The buffer is a [`Cow`]: constructing from a `&[u8]` borrows the
/// caller's bytes for `'a`, constructing from a `Vec<u8>` gives the
/// stream exclusive ownership. Multi-byte fixed-width fields are decoded
/// in the byte order chosen at construction.
#[derive(Debug, Clone)]
pub struct ReadOnlyStream<'a> {
    pub(crate) buffer: Cow<'a, [u8]>,
    pub(crate) position: usize,
    pub(crate) overflowed: bool,
    endian: Endianness,
}

impl<'a> ReadOnlyStream<'a> {
    /// Create a little-endian stream over `buffer`
    pub fn new(buffer: impl Into<Cow<'a, [u8]>>) -> Self {
        Self::with_endianness(buffer, Endianness::Little)
    }

    /// Create a stream over `buffer` with an explicit byte order
    pub fn with_endianness(buffer: impl Into<Cow<'a, [u8]>>, endian: Endianness) -> Self {
        Self {
            buffer: buffer.into(),
            position: 0,
            overflowed: false,
            endian,
        }
    }

    /// Total buffer length in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Byte order applied to multi-byte fixed-width fields
    pub fn endianness(&self) -> Endianness {
        self.endian
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor to an absolute position
    ///
    /// A target past the end latches the overflow flag and leaves the
    /// cursor where it was.
    pub fn set_position(&mut self, position: usize) {
        if position > self.buffer.len() {
            self.overflowed = true;
        } else {
            self.position = position;
        }
    }

    /// Move the cursor back to the start and clear the overflow flag
    pub fn reset_position(&mut self) {
        self.position = 0;
        self.overflowed = false;
    }

    /// Skip `length` bytes without decoding them
    ///
    /// Bounds-checked like any other read: skipping past the end latches
    /// the overflow flag and the cursor stays put.
    pub fn ignore_bytes(&mut self, length: usize) {
        if self.overflowed {
            return;
        }
        match self.position.checked_add(length) {
            Some(next) if next <= self.buffer.len() => self.position = next,
            _ => self.overflowed = true,
        }
    }

    /// Sticky overflow indicator
    ///
    /// Set the first time a read would run past the end of the buffer and
    /// cleared only by [`reset_position`](Self::reset_position) (or the
    /// writer's reset).
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// True while the cursor has not reached the end of the buffer
    pub fn has_data_left(&self) -> bool {
        self.position < self.buffer.len()
    }

    /// The whole underlying buffer, regardless of cursor position
    pub fn view(&self) -> &[u8] {
        &self.buffer
    }

    /// The bytes from the cursor to the end of the buffer
    pub fn remaining_slice(&self) -> &[u8] {
        &self.buffer[self.position..]
    }

    /// Copy the whole underlying buffer
    pub fn copy_data(&self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    /// Copy exactly `target.len()` bytes from the cursor into `target`
    ///
    /// An empty target succeeds trivially. On failure the overflow flag
    /// latches and the cursor does not move.
    pub fn get_bytes(&mut self, target: &mut [u8]) -> Result<()> {
        let bytes = self.take(target.len())?;
        target.copy_from_slice(bytes);
        Ok(())
    }

    /// Borrow the next `length` bytes and advance the cursor
    fn take(&mut self, length: usize) -> Result<&[u8]> {
        if self.overflowed {
            return Err(StreamError::OutOfData);
        }
        if length == 0 {
            return Ok(&[]);
        }
        let next = match self.position.checked_add(length) {
            Some(next) if next <= self.buffer.len() => next,
            _ => {
                self.overflowed = true;
                return Err(StreamError::OutOfData);
            }
        };
        let bytes = &self.buffer[self.position..next];
        self.position = next;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut raw = [0u8; N];
        self.get_bytes(&mut raw)?;
        Ok(raw)
    }

    /// Decode one byte as a boolean (any non-zero value is true)
    pub fn get_bool(&mut self) -> Result<bool> {
        Ok(self.get_u8()? != 0)
    }

    /// Decode an unsigned 8-bit integer
    pub fn get_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Decode a signed 8-bit integer
    pub fn get_i8(&mut self) -> Result<i8> {
        Ok(self.get_u8()? as i8)
    }

    /// Decode an unsigned 16-bit integer in the stream's byte order
    pub fn get_u16(&mut self) -> Result<u16> {
        let raw = self.read_array::<2>()?;
        Ok(match self.endian {
            Endianness::Little => u16::from_le_bytes(raw),
            Endianness::Big => u16::from_be_bytes(raw),
        })
    }

    /// Decode a signed 16-bit integer in the stream's byte order
    pub fn get_i16(&mut self) -> Result<i16> {
        let raw = self.read_array::<2>()?;
        Ok(match self.endian {
            Endianness::Little => i16::from_le_bytes(raw),
            Endianness::Big => i16::from_be_bytes(raw),
        })
    }

    /// Decode a 24-bit unsigned integer in the stream's byte order
    pub fn get_u24(&mut self) -> Result<u32> {
        let raw = self.read_array::<3>()?;
        Ok(match self.endian {
            Endianness::Little => {
                u32::from(raw[0]) | u32::from(raw[1]) << 8 | u32::from(raw[2]) << 16
            }
            Endianness::Big => {
                u32::from(raw[0]) << 16 | u32::from(raw[1]) << 8 | u32::from(raw[2])
            }
        })
    }

    /// Decode an unsigned 32-bit integer in the stream's byte order
    pub fn get_u32(&mut self) -> Result<u32> {
        let raw = self.read_array::<4>()?;
        Ok(match self.endian {
            Endianness::Little => u32::from_le_bytes(raw),
            Endianness::Big => u32::from_be_bytes(raw),
        })
    }

    /// Decode a signed 32-bit integer in the stream's byte order
    pub fn get_i32(&mut self) -> Result<i32> {
        let raw = self.read_array::<4>()?;
        Ok(match self.endian {
            Endianness::Little => i32::from_le_bytes(raw),
            Endianness::Big => i32::from_be_bytes(raw),
        })
    }

    /// Decode an unsigned 64-bit integer in the stream's byte order
    pub fn get_u64(&mut self) -> Result<u64> {
        let raw = self.read_array::<8>()?;
        Ok(match self.endian {
            Endianness::Little => u64::from_le_bytes(raw),
            Endianness::Big => u64::from_be_bytes(raw),
        })
    }

    /// Decode a signed 64-bit integer in the stream's byte order
    pub fn get_i64(&mut self) -> Result<i64> {
        let raw = self.read_array::<8>()?;
        Ok(match self.endian {
            Endianness::Little => i64::from_le_bytes(raw),
            Endianness::Big => i64::from_be_bytes(raw),
        })
    }

    /// Decode a 32-bit float in the stream's byte order
    pub fn get_f32(&mut self) -> Result<f32> {
        let raw = self.read_array::<4>()?;
        Ok(match self.endian {
            Endianness::Little => f32::from_le_bytes(raw),
            Endianness::Big => f32::from_be_bytes(raw),
        })
    }

    /// Decode a 64-bit float in the stream's byte order
    pub fn get_f64(&mut self) -> Result<f64> {
        let raw = self.read_array::<8>()?;
        Ok(match self.endian {
            Endianness::Little => f64::from_le_bytes(raw),
            Endianness::Big => f64::from_be_bytes(raw),
        })
    }

    /// Decode a signed 32-bit integer that is always big-endian on the
    /// wire, regardless of the stream's byte order
    pub fn get_i32_be(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array::<4>()?))
    }

    /// Decode an unsigned 32-bit varint
    pub fn get_var_u32(&mut self) -> Result<u32> {
        let value = varint::decode_u32(|| self.get_u8());
        if value.is_err() {
            self.overflowed = true;
        }
        value
    }

    /// Decode an unsigned 64-bit varint
    pub fn get_var_u64(&mut self) -> Result<u64> {
        let value = varint::decode_u64(|| self.get_u8());
        if value.is_err() {
            self.overflowed = true;
        }
        value
    }

    /// Decode a zigzag-signed 32-bit varint
    pub fn get_var_i32(&mut self) -> Result<i32> {
        Ok(varint::decode_zigzag32(self.get_var_u32()?))
    }

    /// Decode a zigzag-signed 64-bit varint
    pub fn get_var_i64(&mut self) -> Result<i64> {
        Ok(varint::decode_zigzag64(self.get_var_u64()?))
    }

    /// Decode a normalized float written as a scaled signed varint
    pub fn get_normalized_f32(&mut self) -> Result<f32> {
        Ok(self.get_var_i64()? as f32 / 2_147_483_647.0)
    }

    /// Decode a varint-length-prefixed UTF-8 string
    ///
    /// Unlike the fixed-width decoders this call is atomic: any failure
    /// rolls the cursor back to where it was before the call. A payload
    /// that is present but not valid UTF-8 fails with
    /// [`StreamError::InvalidUtf8`] without latching the overflow flag.
    pub fn get_string(&mut self) -> Result<String> {
        let mark = self.position;
        let result = self.get_string_inner();
        if result.is_err() {
            self.position = mark;
        }
        result
    }

    fn get_string_inner(&mut self) -> Result<String> {
        let length = self.get_var_u32()? as usize;
        let bytes = self.take(length)?;
        core::str::from_utf8(bytes)
            .map(String::from)
            .map_err(|_| StreamError::InvalidUtf8)
    }

    /// Decode a raw byte block of exactly `length` bytes (no prefix)
    pub fn get_raw_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
        Ok(self.take(length)?.to_vec())
    }
}

/// Two streams compare equal when their remaining (cursor-to-end) views
/// hold the same bytes; consumed data and endianness do not participate.
impl PartialEq for ReadOnlyStream<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining_slice() == other.remaining_slice()
    }
}

impl Eq for ReadOnlyStream<'_> {}
