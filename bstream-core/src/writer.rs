//! Append-only binary stream writer

use crate::endian::Endianness;
use crate::reader::ReadOnlyStream;
use crate::varint;
use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

/// Append-only buffer of encoded bytes that can also be read back
///
/// The writer owns a [`ReadOnlyStream`] cursor over its own buffer, so
/// everything written is immediately readable with the same position and
/// overflow semantics; `Deref` exposes the whole read API. The read
/// cursor and the append end are independent: writes always go to the
/// end, reads consume from wherever the cursor stands.
///
/// Writes cannot fail; running out of memory aborts in the allocator.
#[derive(Debug, Clone)]
pub struct BinaryStream<'a> {
    stream: ReadOnlyStream<'a>,
}

impl<'a> BinaryStream<'a> {
    /// Create an empty little-endian writer
    pub fn new() -> Self {
        Self::with_endianness(Endianness::Little)
    }

    /// Create an empty writer with an explicit byte order
    pub fn with_endianness(endian: Endianness) -> Self {
        Self {
            stream: ReadOnlyStream::with_endianness(Vec::new(), endian),
        }
    }

    /// Create a writer seeded with existing bytes
    ///
    /// A borrowed buffer stays untouched until the first append, which
    /// clones it into the writer (copy-on-write); pass a `Vec<u8>` to
    /// append in place from the start.
    pub fn from_buffer(buffer: impl Into<Cow<'a, [u8]>>, endian: Endianness) -> Self {
        Self {
            stream: ReadOnlyStream::with_endianness(buffer, endian),
        }
    }

    /// Hint the number of additional bytes the buffer should make room for
    pub fn reserve(&mut self, additional: usize) {
        self.stream.buffer.to_mut().reserve(additional);
    }

    /// Clear the buffer, the read cursor, and the overflow flag
    pub fn reset(&mut self) {
        match &mut self.stream.buffer {
            Cow::Owned(buffer) => buffer.clear(),
            buffer => *buffer = Cow::Owned(Vec::new()),
        }
        self.stream.position = 0;
        self.stream.overflowed = false;
    }

    /// The written bytes
    pub fn data(&self) -> &[u8] {
        self.stream.view()
    }

    /// Take ownership of the accumulated bytes, leaving the writer
    /// freshly reset
    pub fn take_data(&mut self) -> Vec<u8> {
        let data = match &mut self.stream.buffer {
            Cow::Owned(buffer) => core::mem::take(buffer),
            buffer => {
                let copy = buffer.to_vec();
                *buffer = Cow::Owned(Vec::new());
                copy
            }
        };
        self.stream.position = 0;
        self.stream.overflowed = false;
        data
    }

    fn append(&mut self, bytes: &[u8]) {
        self.stream.buffer.to_mut().extend_from_slice(bytes);
    }

    /// Append raw bytes with no length prefix; framing is the caller's
    /// responsibility
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.append(bytes);
    }

    /// Append another stream's remaining (cursor-to-end) view, with no
    /// length prefix
    pub fn write_stream(&mut self, other: &ReadOnlyStream<'_>) {
        self.append(other.remaining_slice());
    }

    /// Encode a boolean as one byte
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Encode an unsigned 8-bit integer
    pub fn write_u8(&mut self, value: u8) {
        self.append(&[value]);
    }

    /// Encode a signed 8-bit integer
    pub fn write_i8(&mut self, value: i8) {
        self.write_u8(value as u8);
    }

    /// Encode an unsigned 16-bit integer in the stream's byte order
    pub fn write_u16(&mut self, value: u16) {
        let raw = match self.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.append(&raw);
    }

    /// Encode a signed 16-bit integer in the stream's byte order
    pub fn write_i16(&mut self, value: i16) {
        self.write_u16(value as u16);
    }

    /// Encode the low 24 bits of `value` in the stream's byte order
    pub fn write_u24(&mut self, value: u32) {
        let raw = match self.endianness() {
            Endianness::Little => [value as u8, (value >> 8) as u8, (value >> 16) as u8],
            Endianness::Big => [(value >> 16) as u8, (value >> 8) as u8, value as u8],
        };
        self.append(&raw);
    }

    /// Encode an unsigned 32-bit integer in the stream's byte order
    pub fn write_u32(&mut self, value: u32) {
        let raw = match self.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.append(&raw);
    }

    /// Encode a signed 32-bit integer in the stream's byte order
    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }

    /// Encode an unsigned 64-bit integer in the stream's byte order
    pub fn write_u64(&mut self, value: u64) {
        let raw = match self.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.append(&raw);
    }

    /// Encode a signed 64-bit integer in the stream's byte order
    pub fn write_i64(&mut self, value: i64) {
        self.write_u64(value as u64);
    }

    /// Encode a 32-bit float in the stream's byte order
    pub fn write_f32(&mut self, value: f32) {
        let raw = match self.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.append(&raw);
    }

    /// Encode a 64-bit float in the stream's byte order
    pub fn write_f64(&mut self, value: f64) {
        let raw = match self.endianness() {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.append(&raw);
    }

    /// Encode a signed 32-bit integer big-endian regardless of the
    /// stream's byte order
    pub fn write_i32_be(&mut self, value: i32) {
        self.append(&value.to_be_bytes());
    }

    /// Encode an unsigned 32-bit varint
    pub fn write_var_u32(&mut self, value: u32) {
        varint::encode_u32(value, self.stream.buffer.to_mut());
    }

    /// Encode an unsigned 64-bit varint
    pub fn write_var_u64(&mut self, value: u64) {
        varint::encode_u64(value, self.stream.buffer.to_mut());
    }

    /// Encode a zigzag-signed 32-bit varint
    pub fn write_var_i32(&mut self, value: i32) {
        self.write_var_u32(varint::encode_zigzag32(value));
    }

    /// Encode a zigzag-signed 64-bit varint
    pub fn write_var_i64(&mut self, value: i64) {
        self.write_var_u64(varint::encode_zigzag64(value));
    }

    /// Encode a float in the range -1 to 1 as a scaled signed varint64
    pub fn write_normalized_f32(&mut self, value: f32) {
        let product = f64::from(value) * 2_147_483_647.0;
        // `f64::round` lives in `std`; replicate round-half-away-from-zero
        // with a core-only expression (`as i64` truncates toward zero).
        let scaled = if product >= 0.0 {
            (product + 0.5) as i64
        } else {
            (product - 0.5) as i64
        };
        self.write_var_i64(scaled);
    }

    /// Encode a varint-length-prefixed string (no terminator)
    pub fn write_string(&mut self, value: &str) {
        self.write_var_u32(value.len() as u32);
        self.append(value.as_bytes());
    }
}

impl<'a> Deref for BinaryStream<'a> {
    type Target = ReadOnlyStream<'a>;

    fn deref(&self) -> &Self::Target {
        &self.stream
    }
}

impl DerefMut for BinaryStream<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.stream
    }
}

impl Default for BinaryStream<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;
    use alloc::vec;

    #[test]
    fn test_endianness_byte_order() {
        let mut big = BinaryStream::with_endianness(Endianness::Big);
        big.write_u32(0x01020304);
        assert_eq!(big.data(), &[0x01, 0x02, 0x03, 0x04]);

        let mut little = BinaryStream::new();
        little.write_u32(0x01020304);
        assert_eq!(little.data(), &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_varint_literal() {
        let mut writer = BinaryStream::new();
        writer.write_var_u32(300);
        assert_eq!(writer.data(), &[0xAC, 0x02]);
    }

    #[test]
    fn test_string_literal() {
        let mut writer = BinaryStream::new();
        writer.write_string("AB");
        assert_eq!(writer.data(), &[0x02, 0x41, 0x42]);
    }

    #[test]
    fn test_u24_byte_order() {
        let mut little = BinaryStream::new();
        little.write_u24(0x010203);
        assert_eq!(little.data(), &[0x03, 0x02, 0x01]);

        let mut big = BinaryStream::with_endianness(Endianness::Big);
        big.write_u24(0x010203);
        assert_eq!(big.data(), &[0x01, 0x02, 0x03]);

        // Bits above the low 24 are dropped
        let mut masked = BinaryStream::new();
        masked.write_u24(0xFF010203);
        assert_eq!(masked.data(), &[0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_big_endian_helper_ignores_stream_order() {
        let mut writer = BinaryStream::new();
        writer.write_i32_be(0x01020304);
        assert_eq!(writer.data(), &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_write_then_read_back() {
        let mut stream = BinaryStream::with_endianness(Endianness::Big);
        stream.write_bool(true);
        stream.write_u8(0x7F);
        stream.write_i8(-3);
        stream.write_u16(0xBEEF);
        stream.write_i16(-2);
        stream.write_u24(0x123456);
        stream.write_u32(0xDEADBEEF);
        stream.write_i32(-7);
        stream.write_u64(0x0102030405060708);
        stream.write_i64(-9);
        stream.write_f32(1.25);
        stream.write_f64(-0.5);
        stream.write_i32_be(42);
        stream.write_var_u32(300);
        stream.write_var_u64(1 << 40);
        stream.write_var_i32(-150);
        stream.write_var_i64(i64::MIN);
        stream.write_string("binary");
        stream.write_bytes(&[0xAB, 0xCD]);

        assert_eq!(stream.get_bool(), Ok(true));
        assert_eq!(stream.get_u8(), Ok(0x7F));
        assert_eq!(stream.get_i8(), Ok(-3));
        assert_eq!(stream.get_u16(), Ok(0xBEEF));
        assert_eq!(stream.get_i16(), Ok(-2));
        assert_eq!(stream.get_u24(), Ok(0x123456));
        assert_eq!(stream.get_u32(), Ok(0xDEADBEEF));
        assert_eq!(stream.get_i32(), Ok(-7));
        assert_eq!(stream.get_u64(), Ok(0x0102030405060708));
        assert_eq!(stream.get_i64(), Ok(-9));
        assert_eq!(stream.get_f32(), Ok(1.25));
        assert_eq!(stream.get_f64(), Ok(-0.5));
        assert_eq!(stream.get_i32_be(), Ok(42));
        assert_eq!(stream.get_var_u32(), Ok(300));
        assert_eq!(stream.get_var_u64(), Ok(1 << 40));
        assert_eq!(stream.get_var_i32(), Ok(-150));
        assert_eq!(stream.get_var_i64(), Ok(i64::MIN));
        assert_eq!(stream.get_string().as_deref(), Ok("binary"));
        assert_eq!(stream.get_raw_bytes(2), Ok(vec![0xAB, 0xCD]));
        assert!(!stream.has_data_left());
        assert!(!stream.is_overflowed());
    }

    #[test]
    fn test_zigzag_edge_values() {
        let values = [0i64, 1, -1, i64::from(i32::MIN), i64::from(i32::MAX), i64::MIN, i64::MAX];
        let mut stream = BinaryStream::new();
        for &value in &values {
            stream.write_var_i64(value);
        }
        for &value in &values {
            assert_eq!(stream.get_var_i64(), Ok(value));
        }
    }

    #[test]
    fn test_normalized_float_round_trip() {
        let mut stream = BinaryStream::new();
        for value in [0.0f32, 1.0, -1.0, 0.5, -0.25] {
            stream.write_normalized_f32(value);
        }
        for value in [0.0f32, 1.0, -1.0, 0.5, -0.25] {
            assert_eq!(stream.get_normalized_f32(), Ok(value));
        }
    }

    #[test]
    fn test_take_data_leaves_writer_reset() {
        let mut writer = BinaryStream::new();
        writer.write_var_u32(300);
        assert_eq!(writer.get_var_u32(), Ok(300));
        assert_eq!(writer.get_u8(), Err(StreamError::OutOfData));
        assert!(writer.is_overflowed());

        let data = writer.take_data();
        assert_eq!(data, vec![0xAC, 0x02]);
        assert_eq!(writer.len(), 0);
        assert_eq!(writer.position(), 0);
        assert!(!writer.is_overflowed());

        // The writer is immediately usable again
        writer.write_u8(0x01);
        assert_eq!(writer.get_u8(), Ok(0x01));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut writer = BinaryStream::new();
        writer.write_u32(5);
        writer.set_position(2);
        writer.reset();
        assert_eq!(writer.len(), 0);
        assert_eq!(writer.position(), 0);
        assert!(!writer.is_overflowed());
    }

    #[test]
    fn test_reserve_has_no_observable_effect() {
        let mut writer = BinaryStream::new();
        writer.reserve(1024);
        assert_eq!(writer.len(), 0);
        writer.write_u8(0x01);
        assert_eq!(writer.data(), &[0x01]);
    }

    #[test]
    fn test_write_stream_appends_remaining_view() {
        let data = [0x01, 0x02, 0x03];
        let mut source = ReadOnlyStream::new(&data[..]);
        source.ignore_bytes(1);

        let mut writer = BinaryStream::new();
        writer.write_u8(0xFF);
        writer.write_stream(&source);
        assert_eq!(writer.data(), &[0xFF, 0x02, 0x03]);
    }

    #[test]
    fn test_from_buffer_reads_before_first_append() {
        let seed = [0xAC, 0x02];
        let mut stream = BinaryStream::from_buffer(&seed[..], Endianness::Little);
        assert_eq!(stream.get_var_u32(), Ok(300));

        // Appending clones the borrowed seed; the original is untouched
        stream.write_u8(0x07);
        assert_eq!(stream.data(), &[0xAC, 0x02, 0x07]);
        assert_eq!(seed, [0xAC, 0x02]);
        assert_eq!(stream.get_u8(), Ok(0x07));
    }

    #[test]
    fn test_default_is_empty_little_endian() {
        let writer = BinaryStream::default();
        assert!(writer.is_empty());
        assert_eq!(writer.endianness(), Endianness::Little);
    }
}
