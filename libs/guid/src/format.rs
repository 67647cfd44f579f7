//! Canonical GUID text emission.
//!
//! Every format renders each byte as two lower-case hex digits with fixed
//! separator positions; X additionally decorates each group with a `0x`
//! prefix at full field width. Output always matches the canonical length
//! for the format, so `Parse(Format(g, f)) == g` holds for every format.

use crate::guid::Guid;
use crate::parser::GuidFormat;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";

fn push_byte(out: &mut String, byte: u8) {
    out.push(HEX_LOWER[(byte >> 4) as usize] as char);
    out.push(HEX_LOWER[(byte & 0xf) as usize] as char);
}

fn push_u16(out: &mut String, v: u16) {
    push_byte(out, (v >> 8) as u8);
    push_byte(out, v as u8);
}

fn push_u32(out: &mut String, v: u32) {
    push_u16(out, (v >> 16) as u16);
    push_u16(out, v as u16);
}

fn push_hyphenated(out: &mut String, guid: &Guid) {
    let d = guid.d();
    push_u32(out, guid.a());
    out.push('-');
    push_u16(out, guid.b());
    out.push('-');
    push_u16(out, guid.c());
    out.push('-');
    push_byte(out, d[0]);
    push_byte(out, d[1]);
    out.push('-');
    for &byte in &d[2..] {
        push_byte(out, byte);
    }
}

/// Render `guid` in the requested format.
pub fn format(guid: &Guid, format: GuidFormat) -> String {
    let mut out = String::with_capacity(format.formatted_len());
    match format {
        GuidFormat::Simple => {
            push_u32(&mut out, guid.a());
            push_u16(&mut out, guid.b());
            push_u16(&mut out, guid.c());
            for byte in guid.d() {
                push_byte(&mut out, byte);
            }
        }
        GuidFormat::Hyphenated => push_hyphenated(&mut out, guid),
        GuidFormat::Braced => {
            out.push('{');
            push_hyphenated(&mut out, guid);
            out.push('}');
        }
        GuidFormat::Parenthesized => {
            out.push('(');
            push_hyphenated(&mut out, guid);
            out.push(')');
        }
        GuidFormat::Hex => {
            out.push_str("{0x");
            push_u32(&mut out, guid.a());
            out.push_str(",0x");
            push_u16(&mut out, guid.b());
            out.push_str(",0x");
            push_u16(&mut out, guid.c());
            out.push_str(",{");
            for (i, byte) in guid.d().into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str("0x");
                push_byte(&mut out, byte);
            }
            out.push_str("}}");
        }
    }
    debug_assert_eq!(out.len(), format.formatted_len());
    out
}
