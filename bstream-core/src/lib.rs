#![no_std]

//! Bstream Core - Binary Stream Format Definitions
//!
//! This crate provides the core encode/decode engine for the bstream
//! wire format: fixed-width and varint codecs, endianness handling, and
//! the paired reader/writer stream types, with no I/O dependencies.

extern crate alloc;

pub mod endian;
pub mod error;
pub mod reader;
pub mod varint;
pub mod writer;

pub use endian::*;
pub use error::*;
pub use reader::*;
pub use writer::*;
