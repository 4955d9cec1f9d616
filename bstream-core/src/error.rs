//! Error types for binary stream operations

/// Errors that can occur while decoding from a binary stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// A read would consume more bytes than remain in the buffer
    OutOfData,
    /// A varint ran past its maximum group count
    MalformedVarInt,
    /// A string payload was not valid UTF-8
    InvalidUtf8,
}

impl core::fmt::Display for StreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            StreamError::OutOfData => "Read past the end of the stream",
            StreamError::MalformedVarInt => "Varint exceeds its maximum encoded length",
            StreamError::InvalidUtf8 => "String payload is not valid UTF-8",
        };
        write!(f, "{msg}")
    }
}

/// Result type for binary stream operations
pub type Result<T> = core::result::Result<T, StreamError>;
