//! Byte-order mode for multi-byte fixed-width fields

/// Byte order applied to multi-byte fixed-width encode/decode
///
/// Fixed at stream construction and applied uniformly to every
/// fixed-width field; single-byte fields are unaffected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Least-significant byte first (the wire default)
    #[default]
    Little = 0,
    /// Most-significant byte first
    Big = 1,
}

impl Endianness {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Endianness::Little),
            1 => Some(Endianness::Big),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for Endianness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Endianness::Little => write!(f, "little"),
            Endianness::Big => write!(f, "big"),
        }
    }
}
