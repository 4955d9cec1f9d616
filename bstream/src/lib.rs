//! Bstream - Binary Stream Reader/Writer
//!
//! This library provides a paired writer/reader for constructing and parsing
//! compact byte sequences: fixed-width fields in either byte order, varints,
//! length-prefixed strings, and raw blocks, over owned or borrowed buffers.
//!
//! ## Architecture
//!
//! Bstream follows a clean specification/implementation separation:
//!
//! - **bstream-core**: Pure codec engine - streams, varints, endianness (no I/O)
//! - **bstream**: std integration - memory mapping and `std::io` bridges
//!
//! ## Quick Start
//!
//! ```rust
//! use bstream::{BinaryStream, ReadOnlyStream};
//!
//! let mut writer = BinaryStream::new();
//! writer.write_var_u32(300);
//! writer.write_string("hello");
//! let bytes = writer.take_data();
//!
//! let mut reader = ReadOnlyStream::new(bytes);
//! assert_eq!(reader.get_var_u32(), Ok(300));
//! assert_eq!(reader.get_string().as_deref(), Ok("hello"));
//! assert!(!reader.is_overflowed());
//! ```
//!
//! ## Features
//!
//! - **Owned or borrowed buffers**: decode caller-managed bytes without copying
//! - **Sticky overflow flag**: decode a whole packet, check for truncation once
//! - **Memory-mapped I/O**: zero-copy readers over on-disk captures
//! - **`std::io` bridges**: compose streams with the standard I/O ecosystem

// Re-export core abstractions and format definitions
pub use bstream_core::{
    // Stream types
    BinaryStream, ReadOnlyStream,
    // Format definitions
    Endianness,
    // Error handling
    Result, StreamError,
    // Varint primitives
    varint,
};

// Implementation modules
pub mod io;
#[cfg(feature = "mmap")]
pub mod mmap;

// Public exports
pub use io::{StreamReader, StreamWriter};

// Memory mapping features
#[cfg(feature = "mmap")]
pub use mmap::MappedStream;
