//! Multi-format GUID text parser.
//!
//! ## Purpose
//!
//! Strict decoders for the five textual shapes plus an auto-detecting entry
//! point. Every decoder validates into locals and materializes a [`Guid`]
//! only on full success; malformed input is reported with a categorical
//! [`GuidError`] carrying the byte offset of the violation where one exists.
//!
//! ## Format Support
//!
//! | Selector | Shape | Length |
//! |----------|-------|--------|
//! | N | 32 contiguous hex digits | 32 |
//! | D | 8-4-4-4-12 hyphenated groups | 36 |
//! | B | `{` + D + `}` | 38 |
//! | P | `(` + D + `)` | 38 |
//! | X | `{0x..,0x..,0x..,{0x..,×8}}` with flexible group widths | 68 canonical |
//!
//! Auto-detection inspects the first character and the separator positions:
//! `(` selects P, `{` selects B when a dash sits at offset 9 and X
//! otherwise, a dash at offset 8 selects D, anything else selects N.
//!
//! The hyphenated shape additionally carries a legacy compatibility
//! relaxation: when the strict fixed-width decode fails and the input
//! contains `x`, `X` or `+`, each hyphen-delimited group is retried with an
//! optional leading `+` and `0x` prefix. The decorations consume group
//! width (the overall 36-character shape and dash positions are
//! unchanged), so a four-character group may read `0x34` or `+234` but
//! never `0x1234`. The relaxation exists for old serialized data and is
//! never applied by [`parse_exact`].

use crate::error::{GuidError, GuidResult};
use crate::guid::Guid;
use tracing::trace;

/// The recognized textual formats, named by their selector letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuidFormat {
    /// `N`: 32 contiguous hex digits.
    Simple,
    /// `D`: hyphenated 8-4-4-4-12 groups.
    Hyphenated,
    /// `B`: hyphenated form wrapped in braces.
    Braced,
    /// `P`: hyphenated form wrapped in parentheses.
    Parenthesized,
    /// `X`: `0x`-decorated hex groups in nested braces.
    Hex,
}

impl GuidFormat {
    /// Resolve a case-insensitive selector letter.
    pub fn from_selector(selector: char) -> GuidResult<Self> {
        match selector {
            'N' | 'n' => Ok(GuidFormat::Simple),
            'D' | 'd' => Ok(GuidFormat::Hyphenated),
            'B' | 'b' => Ok(GuidFormat::Braced),
            'P' | 'p' => Ok(GuidFormat::Parenthesized),
            'X' | 'x' => Ok(GuidFormat::Hex),
            found => Err(GuidError::InvalidFormatSelector { found }),
        }
    }

    /// Canonical selector letter.
    pub const fn selector(self) -> char {
        match self {
            GuidFormat::Simple => 'N',
            GuidFormat::Hyphenated => 'D',
            GuidFormat::Braced => 'B',
            GuidFormat::Parenthesized => 'P',
            GuidFormat::Hex => 'X',
        }
    }

    /// Length of the canonical formatted output.
    pub const fn formatted_len(self) -> usize {
        match self {
            GuidFormat::Simple => 32,
            GuidFormat::Hyphenated => 36,
            GuidFormat::Braced | GuidFormat::Parenthesized => 38,
            GuidFormat::Hex => 68,
        }
    }
}

/// Parse text in any recognized format.
///
/// Trims surrounding whitespace, auto-detects the shape, then runs the
/// matching strict decoder. The hyphenated path may engage the legacy
/// compatibility relaxation (see module docs).
pub fn parse(input: &str) -> GuidResult<Guid> {
    let text = input.trim();
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(GuidError::UnrecognizedFormat);
    }
    match bytes[0] {
        b'(' => parse_parenthesized(bytes),
        b'{' => {
            if bytes.len() > 9 && bytes[9] == b'-' {
                parse_braced(bytes)
            } else {
                parse_hex_form(bytes)
            }
        }
        _ if bytes.len() > 8 && bytes[8] == b'-' => parse_hyphenated_lenient(text),
        _ => parse_simple(bytes),
    }
}

/// Parse with exactly one format.
///
/// The input is trimmed once and decoded strictly with the single selected
/// format. No auto-detection, no compatibility fallback.
pub fn parse_exact(input: &str, format: GuidFormat) -> GuidResult<Guid> {
    let bytes = input.trim().as_bytes();
    match format {
        GuidFormat::Simple => parse_simple(bytes),
        GuidFormat::Hyphenated => parse_hyphenated(bytes, 0),
        GuidFormat::Braced => parse_braced(bytes),
        GuidFormat::Parenthesized => parse_parenthesized(bytes),
        GuidFormat::Hex => parse_hex_form(bytes),
    }
}

fn hex_val(b: u8) -> Option<u64> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u64),
        b'a'..=b'f' => Some((b - b'a' + 10) as u64),
        b'A'..=b'F' => Some((b - b'A' + 10) as u64),
        _ => None,
    }
}

/// Decode exactly `width` hex digits starting at `start`.
///
/// `base` is the offset of `bytes` within the original trimmed input so
/// that reported offsets stay meaningful for wrapped shapes.
fn hex_fixed(bytes: &[u8], start: usize, width: usize, base: usize) -> GuidResult<u64> {
    let mut acc = 0u64;
    for i in 0..width {
        let v = hex_val(bytes[start + i]).ok_or(GuidError::UnexpectedCharacter {
            offset: base + start + i,
        })?;
        acc = (acc << 4) | v;
    }
    Ok(acc)
}

fn parse_simple(bytes: &[u8]) -> GuidResult<Guid> {
    if bytes.len() != 32 {
        return Err(GuidError::InvalidLength {
            expected: 32,
            got: bytes.len(),
        });
    }
    let a = hex_fixed(bytes, 0, 8, 0)? as u32;
    let b = hex_fixed(bytes, 8, 4, 0)? as u16;
    let c = hex_fixed(bytes, 12, 4, 0)? as u16;
    let mut d = [0u8; 8];
    for (i, slot) in d.iter_mut().enumerate() {
        *slot = hex_fixed(bytes, 16 + 2 * i, 2, 0)? as u8;
    }
    Ok(Guid::from_fields(a, b, c, d))
}

fn parse_hyphenated(bytes: &[u8], base: usize) -> GuidResult<Guid> {
    if bytes.len() != 36 {
        return Err(GuidError::InvalidLength {
            expected: 36,
            got: bytes.len(),
        });
    }
    for off in [8usize, 13, 18, 23] {
        if bytes[off] != b'-' {
            return Err(GuidError::DashPosition { offset: base + off });
        }
    }
    let a = hex_fixed(bytes, 0, 8, base)? as u32;
    let b = hex_fixed(bytes, 9, 4, base)? as u16;
    let c = hex_fixed(bytes, 14, 4, base)? as u16;
    let d01 = hex_fixed(bytes, 19, 4, base)? as u16;
    let mut d = [0u8; 8];
    d[0] = (d01 >> 8) as u8;
    d[1] = d01 as u8;
    for i in 0..6 {
        d[2 + i] = hex_fixed(bytes, 24 + 2 * i, 2, base)? as u8;
    }
    Ok(Guid::from_fields(a, b, c, d))
}

fn parse_braced(bytes: &[u8]) -> GuidResult<Guid> {
    if bytes.len() < 2 || bytes[0] != b'{' {
        return Err(GuidError::MissingBrace);
    }
    if bytes[bytes.len() - 1] != b'}' {
        return Err(GuidError::MissingEndBrace);
    }
    if bytes.len() != 38 {
        return Err(GuidError::InvalidLength {
            expected: 38,
            got: bytes.len(),
        });
    }
    parse_hyphenated(&bytes[1..37], 1)
}

fn parse_parenthesized(bytes: &[u8]) -> GuidResult<Guid> {
    if bytes.len() < 2 || bytes[0] != b'(' {
        return Err(GuidError::MissingBrace);
    }
    if bytes[bytes.len() - 1] != b')' {
        return Err(GuidError::MissingEndBrace);
    }
    if bytes.len() != 38 {
        return Err(GuidError::InvalidLength {
            expected: 38,
            got: bytes.len(),
        });
    }
    parse_hyphenated(&bytes[1..37], 1)
}

/// Strict hyphenated decode with the legacy decorated-group fallback.
fn parse_hyphenated_lenient(text: &str) -> GuidResult<Guid> {
    let strict = parse_hyphenated(text.as_bytes(), 0);
    match strict {
        Ok(guid) => Ok(guid),
        Err(strict_err) => {
            // The fallback only fires for inputs that can plausibly carry
            // the old 0x/+ decorations; everything else keeps the strict
            // error so failure categories stay stable.
            if text.contains(&['x', 'X', '+'][..]) {
                trace!(
                    input_len = text.len(),
                    "strict hyphenated decode failed, retrying with decorated groups"
                );
                parse_decorated_groups(text)
            } else {
                Err(strict_err)
            }
        }
    }
}

/// Decode one legacy hyphen-delimited group: optional `+`, optional `0x`,
/// then up to `max_digits` significant hex digits.
fn decorated_group(bytes: &[u8], max_digits: usize, group: usize, base: usize) -> GuidResult<u64> {
    let mut pos = 0usize;
    if bytes.first() == Some(&b'+') {
        pos += 1;
    }
    if bytes.get(pos) == Some(&b'0') && matches!(bytes.get(pos + 1), Some(&b'x') | Some(&b'X')) {
        pos += 2;
    }
    if pos == bytes.len() {
        return Err(GuidError::UnexpectedCharacter { offset: base + pos });
    }
    let mut acc = 0u64;
    let mut significant = 0usize;
    for (i, &b) in bytes[pos..].iter().enumerate() {
        let v = hex_val(b).ok_or(GuidError::UnexpectedCharacter {
            offset: base + pos + i,
        })?;
        if significant > 0 || v != 0 {
            significant += 1;
        }
        if significant > max_digits {
            return Err(GuidError::HexGroupOverflow { group });
        }
        acc = (acc << 4) | v;
    }
    Ok(acc)
}

fn parse_decorated_groups(text: &str) -> GuidResult<Guid> {
    let bytes = text.as_bytes();
    if bytes.len() != 36 {
        return Err(GuidError::InvalidLength {
            expected: 36,
            got: bytes.len(),
        });
    }
    for off in [8usize, 13, 18, 23] {
        if bytes[off] != b'-' {
            return Err(GuidError::DashPosition { offset: off });
        }
    }
    let a = decorated_group(&bytes[0..8], 8, 0, 0)?;
    let b = decorated_group(&bytes[9..13], 4, 1, 9)?;
    let c = decorated_group(&bytes[14..18], 4, 2, 14)?;
    let d01 = decorated_group(&bytes[19..23], 4, 3, 19)?;
    let tail = decorated_group(&bytes[24..36], 12, 4, 24)?;
    let mut d = [0u8; 8];
    d[0] = (d01 >> 8) as u8;
    d[1] = d01 as u8;
    d[2..8].copy_from_slice(&tail.to_be_bytes()[2..8]);
    Ok(Guid::from_fields(a as u32, b as u16, c as u16, d))
}

/// Cursor over the X-format byte stream.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Scanner { bytes, pos: 0 }
    }

    fn expect_byte(&mut self, want: u8, err: GuidError) -> GuidResult<()> {
        match self.bytes.get(self.pos) {
            Some(&b) if b == want => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(err),
        }
    }

    fn expect_comma(&mut self) -> GuidResult<()> {
        let at = self.pos;
        self.expect_byte(b',', GuidError::MissingComma { offset: at })
    }

    fn expect_hex_prefix(&mut self) -> GuidResult<()> {
        let at = self.pos;
        if self.bytes.get(at) == Some(&b'0')
            && matches!(self.bytes.get(at + 1), Some(&b'x') | Some(&b'X'))
        {
            self.pos += 2;
            Ok(())
        } else {
            Err(GuidError::MissingHexPrefix { offset: at })
        }
    }

    /// Consume one or more hex digits. Leading zeros never count toward
    /// the field width; more than `max_digits` significant digits is an
    /// overflow of the target field, not a format violation.
    fn hex_group(&mut self, max_digits: usize, group: usize) -> GuidResult<u64> {
        let mut acc = 0u64;
        let mut digits = 0usize;
        let mut significant = 0usize;
        while let Some(&b) = self.bytes.get(self.pos) {
            let Some(v) = hex_val(b) else { break };
            self.pos += 1;
            digits += 1;
            if significant > 0 || v != 0 {
                significant += 1;
            }
            if significant > max_digits {
                return Err(GuidError::HexGroupOverflow { group });
            }
            acc = (acc << 4) | v;
        }
        if digits == 0 {
            return Err(GuidError::UnexpectedCharacter { offset: self.pos });
        }
        Ok(acc)
    }
}

fn parse_hex_form(bytes: &[u8]) -> GuidResult<Guid> {
    let mut s = Scanner::new(bytes);
    s.expect_byte(b'{', GuidError::MissingBrace)?;
    s.expect_hex_prefix()?;
    let a = s.hex_group(8, 0)? as u32;
    s.expect_comma()?;
    s.expect_hex_prefix()?;
    let b = s.hex_group(4, 1)? as u16;
    s.expect_comma()?;
    s.expect_hex_prefix()?;
    let c = s.hex_group(4, 2)? as u16;
    s.expect_comma()?;
    s.expect_byte(b'{', GuidError::MissingBrace)?;
    let mut d = [0u8; 8];
    for (i, slot) in d.iter_mut().enumerate() {
        s.expect_hex_prefix()?;
        *slot = s.hex_group(2, 3 + i)? as u8;
        if i < 7 {
            s.expect_comma()?;
        }
    }
    s.expect_byte(b'}', GuidError::MissingEndBrace)?;
    s.expect_byte(b'}', GuidError::MissingEndBrace)?;
    if s.pos != bytes.len() {
        return Err(GuidError::TrailingCharacters);
    }
    Ok(Guid::from_fields(a, b, c, d))
}
