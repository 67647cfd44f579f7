//! The 128-bit GUID value type.
//!
//! ## Purpose
//!
//! Immutable 16-byte identifier in the canonical Microsoft field layout:
//! one 32-bit field, two 16-bit fields, then eight bytes stored in byte
//! order. The first three fields are endianness-sensitive on the wire; the
//! trailing eight bytes never are.
//!
//! ## Integration Points
//!
//! - **Text codec**: [`Guid::parse`] / [`Guid::format`] round-trip the five
//!   textual shapes (see [`crate::parser`] and [`crate::format`]).
//! - **Binary layout**: [`Guid::to_bytes`] / [`Guid::from_bytes`] emit the
//!   historical little-endian wire form; the `_be` variants produce the
//!   RFC 4122 big-endian byte order.
//! - **Ordering**: comparison is field-by-field as unsigned quantities,
//!   which is NOT equivalent to comparing the 16-byte blob.

use crate::error::{GuidError, GuidResult};
use crate::format;
use crate::parser;
use crate::parser::GuidFormat;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

/// A 128-bit globally unique identifier.
///
/// **CRITICAL**: field ordering gives exactly 16 bytes without padding
/// (u32, u16, u16, [u8; 8]). DO NOT REORDER.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, AsBytes, FromBytes, FromZeroes)]
pub struct Guid {
    a: u32,
    b: u16,
    c: u16,
    d: [u8; 8],
}

impl Guid {
    /// Size of the binary representation in bytes.
    pub const SIZE: usize = 16;

    /// The all-zero GUID.
    pub const NIL: Guid = Guid {
        a: 0,
        b: 0,
        c: 0,
        d: [0; 8],
    };

    /// Construct from the four canonical fields.
    pub const fn from_fields(a: u32, b: u16, c: u16, d: [u8; 8]) -> Self {
        Guid { a, b, c, d }
    }

    /// Decode from the historical little-endian wire layout.
    ///
    /// The slice must be exactly 16 bytes: `a`, `b`, `c` little-endian,
    /// then the trailing eight bytes in order.
    pub fn from_bytes(bytes: &[u8]) -> GuidResult<Self> {
        let raw: &[u8; 16] = bytes
            .try_into()
            .map_err(|_| GuidError::InvalidByteCount { got: bytes.len() })?;
        Ok(Guid {
            a: u32::from_le_bytes(raw[0..4].try_into().unwrap()),
            b: u16::from_le_bytes(raw[4..6].try_into().unwrap()),
            c: u16::from_le_bytes(raw[6..8].try_into().unwrap()),
            d: raw[8..16].try_into().unwrap(),
        })
    }

    /// Decode from RFC 4122 big-endian byte order.
    ///
    /// Only the first three fields differ from [`Guid::from_bytes`]; the
    /// trailing eight bytes are identical in both layouts.
    pub fn from_bytes_be(bytes: &[u8]) -> GuidResult<Self> {
        let raw: &[u8; 16] = bytes
            .try_into()
            .map_err(|_| GuidError::InvalidByteCount { got: bytes.len() })?;
        Ok(Guid {
            a: u32::from_be_bytes(raw[0..4].try_into().unwrap()),
            b: u16::from_be_bytes(raw[4..6].try_into().unwrap()),
            c: u16::from_be_bytes(raw[6..8].try_into().unwrap()),
            d: raw[8..16].try_into().unwrap(),
        })
    }

    /// Emit the historical little-endian wire layout.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.a.to_le_bytes());
        out[4..6].copy_from_slice(&self.b.to_le_bytes());
        out[6..8].copy_from_slice(&self.c.to_le_bytes());
        out[8..16].copy_from_slice(&self.d);
        out
    }

    /// Emit RFC 4122 big-endian byte order.
    pub fn to_bytes_be(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.a.to_be_bytes());
        out[4..6].copy_from_slice(&self.b.to_be_bytes());
        out[6..8].copy_from_slice(&self.c.to_be_bytes());
        out[8..16].copy_from_slice(&self.d);
        out
    }

    /// Write the 16-byte form into `dst`, returning false (and writing
    /// nothing) when the buffer is shorter than 16 bytes.
    pub fn try_write_bytes(&self, dst: &mut [u8], big_endian: bool) -> bool {
        if dst.len() < Self::SIZE {
            return false;
        }
        let bytes = if big_endian {
            self.to_bytes_be()
        } else {
            self.to_bytes()
        };
        dst[..Self::SIZE].copy_from_slice(&bytes);
        true
    }

    /// First field (32-bit).
    pub const fn a(&self) -> u32 {
        self.a
    }

    /// Second field (16-bit).
    pub const fn b(&self) -> u16 {
        self.b
    }

    /// Third field (16-bit).
    pub const fn c(&self) -> u16 {
        self.c
    }

    /// Trailing eight bytes, always in byte order.
    pub const fn d(&self) -> [u8; 8] {
        self.d
    }

    /// RFC 4122 version nibble (top four bits of the third field).
    pub const fn version(&self) -> u8 {
        (self.c >> 12) as u8
    }

    /// RFC 4122 variant bits (top two bits of the ninth byte).
    pub const fn variant(&self) -> u8 {
        self.d[0] >> 6
    }

    /// True for the all-zero value.
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Parse text in any recognized format, auto-detected from its shape.
    ///
    /// Leading and trailing whitespace is trimmed first. See
    /// [`crate::parser::parse`] for the detection rules and the legacy
    /// compatibility relaxation of the hyphenated shape.
    pub fn parse(input: &str) -> GuidResult<Self> {
        parser::parse(input)
    }

    /// Probing variant of [`Guid::parse`]: `None` on any malformed input,
    /// never an error.
    pub fn try_parse(input: &str) -> Option<Self> {
        parser::parse(input).ok()
    }

    /// Parse with exactly one format, no auto-detection and no
    /// compatibility fallback.
    pub fn parse_exact(input: &str, format: GuidFormat) -> GuidResult<Self> {
        parser::parse_exact(input, format)
    }

    /// Render in the requested format as canonical lower-case hex.
    pub fn format(&self, format: GuidFormat) -> String {
        format::format(self, format)
    }
}

/// Field-by-field unsigned comparison in declared order.
///
/// This is deliberately not a memcmp of the 16-byte layout: the first
/// field alone decides before any trailing byte is consulted.
impl Ord for Guid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a
            .cmp(&other.a)
            .then_with(|| self.b.cmp(&other.b))
            .then_with(|| self.c.cmp(&other.c))
            .then_with(|| self.d.cmp(&other.d))
    }
}

impl PartialOrd for Guid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::format(self, GuidFormat::Hyphenated))
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self)
    }
}

impl FromStr for Guid {
    type Err = GuidError;

    fn from_str(s: &str) -> GuidResult<Self> {
        parser::parse(s)
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::NIL
    }
}

#[cfg(feature = "serialization")]
impl serde::Serialize for Guid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serialization")]
impl<'de> serde::Deserialize<'de> for Guid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Guid::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_size() {
        assert_eq!(std::mem::size_of::<Guid>(), Guid::SIZE);
        assert_eq!(Guid::SIZE, 16);
    }

    #[test]
    fn test_field_accessors() {
        let g = Guid::from_fields(
            0x00112233,
            0x4455,
            0x6677,
            [0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff],
        );
        assert_eq!(g.a(), 0x00112233);
        assert_eq!(g.b(), 0x4455);
        assert_eq!(g.c(), 0x6677);
        assert_eq!(g.d()[0], 0x88);
        assert_eq!(g.d()[7], 0xff);
    }

    #[test]
    fn test_byte_round_trip_le() {
        let bytes: [u8; 16] = [
            0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ];
        let g = Guid::from_bytes(&bytes).unwrap();
        assert_eq!(g.a(), 0x00112233);
        assert_eq!(g.b(), 0x4455);
        assert_eq!(g.c(), 0x6677);
        assert_eq!(g.to_bytes(), bytes);
    }

    #[test]
    fn test_byte_round_trip_be() {
        let bytes: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ];
        let g = Guid::from_bytes_be(&bytes).unwrap();
        assert_eq!(g.a(), 0x00112233);
        assert_eq!(g.b(), 0x4455);
        assert_eq!(g.c(), 0x6677);
        assert_eq!(g.to_bytes_be(), bytes);
        // Trailing eight bytes identical in both layouts.
        assert_eq!(g.to_bytes()[8..], bytes[8..]);
    }

    #[test]
    fn test_from_bytes_wrong_count() {
        assert_eq!(
            Guid::from_bytes(&[0u8; 15]),
            Err(GuidError::InvalidByteCount { got: 15 })
        );
        assert_eq!(
            Guid::from_bytes_be(&[0u8; 17]),
            Err(GuidError::InvalidByteCount { got: 17 })
        );
    }

    #[test]
    fn test_try_write_bytes_short_buffer() {
        let g = Guid::from_fields(1, 2, 3, [4; 8]);
        let mut short = [0u8; 15];
        assert!(!g.try_write_bytes(&mut short, false));
        assert_eq!(short, [0u8; 15]);

        let mut exact = [0u8; 16];
        assert!(g.try_write_bytes(&mut exact, false));
        assert_eq!(exact, g.to_bytes());

        let mut wide = [0u8; 20];
        assert!(g.try_write_bytes(&mut wide, true));
        assert_eq!(&wide[..16], &g.to_bytes_be());
    }

    #[test]
    fn test_ordering_is_field_wise_not_blob_wise() {
        // a = 0x00000100 serializes little-endian as 00 01 00 00 ...,
        // a = 0x00000001 as 01 00 00 00 ...: a memcmp of the wire bytes
        // would order hi before lo, the field compare must not.
        let hi = Guid::from_fields(0x0000_0100, 0, 0, [0; 8]);
        let lo = Guid::from_fields(0x0000_0001, 0, 0, [0; 8]);
        assert!(hi > lo);
        assert_eq!(hi.to_bytes()[0], 0x00);
        assert_eq!(lo.to_bytes()[0], 0x01);
        assert!(hi.to_bytes() < lo.to_bytes());
    }

    #[test]
    fn test_ordering_first_field_decides() {
        let small_a = Guid::from_fields(1, 0xffff, 0xffff, [0xff; 8]);
        let large_a = Guid::from_fields(2, 0, 0, [0; 8]);
        assert!(small_a < large_a);

        let d_low = Guid::from_fields(7, 7, 7, [0, 0, 0, 0, 0, 0, 0, 1]);
        let d_high = Guid::from_fields(7, 7, 7, [0, 0, 0, 0, 0, 0, 0, 2]);
        assert!(d_low < d_high);
    }

    #[test]
    fn test_version_and_variant() {
        let g = Guid::parse("12345678-1234-4234-b234-123456789012").unwrap();
        assert_eq!(g.version(), 4);
        assert_eq!(g.variant(), 0b10);
    }

    #[test]
    fn test_nil_and_default() {
        assert!(Guid::NIL.is_nil());
        assert_eq!(Guid::default(), Guid::NIL);
        assert_eq!(Guid::NIL.to_bytes(), [0u8; 16]);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_serde_round_trip() {
        let g = Guid::parse("12345678-9abc-def0-1234-56789abcdef0").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"12345678-9abc-def0-1234-56789abcdef0\"");
        let back: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
