//! Codec round-trip and failure-category integration tests.

use coreval_guid::{Guid, GuidError, GuidFormat};
use proptest::prelude::*;

const ALL_FORMATS: [GuidFormat; 5] = [
    GuidFormat::Simple,
    GuidFormat::Hyphenated,
    GuidFormat::Braced,
    GuidFormat::Parenthesized,
    GuidFormat::Hex,
];

proptest! {
    #[test]
    fn format_then_parse_round_trips_every_format(bytes in any::<[u8; 16]>()) {
        let guid = Guid::from_bytes(&bytes).unwrap();
        for fmt in ALL_FORMATS {
            let text = guid.format(fmt);
            prop_assert_eq!(text.len(), fmt.formatted_len());
            prop_assert_eq!(Guid::parse(&text).unwrap(), guid);
            prop_assert_eq!(Guid::parse_exact(&text, fmt).unwrap(), guid);
        }
    }

    #[test]
    fn byte_layouts_round_trip(bytes in any::<[u8; 16]>()) {
        let guid = Guid::from_bytes(&bytes).unwrap();
        prop_assert_eq!(guid.to_bytes(), bytes);
        prop_assert_eq!(Guid::from_bytes_be(&guid.to_bytes_be()).unwrap(), guid);
        // The two layouts agree on the trailing eight bytes and disagree
        // on the first three fields unless those happen to be palindromic.
        prop_assert_eq!(&guid.to_bytes()[8..], &guid.to_bytes_be()[8..]);
    }

    #[test]
    fn parse_accepts_upper_case(bytes in any::<[u8; 16]>()) {
        let guid = Guid::from_bytes(&bytes).unwrap();
        let upper = guid.format(GuidFormat::Hyphenated).to_uppercase();
        prop_assert_eq!(Guid::parse(&upper).unwrap(), guid);
    }

    #[test]
    fn display_matches_hyphenated(bytes in any::<[u8; 16]>()) {
        let guid = Guid::from_bytes(&bytes).unwrap();
        prop_assert_eq!(guid.to_string(), guid.format(GuidFormat::Hyphenated));
        prop_assert_eq!(guid.to_string().parse::<Guid>().unwrap(), guid);
    }
}

#[test]
fn failure_categories_are_stable() {
    // Missing closing brace.
    assert_eq!(
        Guid::parse("{12345678-1234-1234-1234-123456789012"),
        Err(GuidError::MissingEndBrace)
    );
    // Invalid hex character.
    assert_eq!(
        Guid::parse("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"),
        Err(GuidError::UnexpectedCharacter { offset: 0 })
    );
    // Too-long hex group in X format is an overflow, not a format error.
    let err = Guid::parse("{0x123456789,0x9abc,0xdef0,{0x1,0x2,0x3,0x4,0x5,0x6,0x7,0x8}}")
        .unwrap_err();
    assert_eq!(err, GuidError::HexGroupOverflow { group: 0 });
    assert!(err.is_overflow());
    // Wrong total length.
    assert!(matches!(
        Guid::parse("12345678-1234"),
        Err(GuidError::InvalidLength { .. })
    ));
}

#[test]
fn try_parse_reports_failure_uniformly() {
    // Format problem and overflow both collapse to None.
    assert!(Guid::try_parse("12345678-1234").is_none());
    assert!(
        Guid::try_parse("{0x123456789,0x9abc,0xdef0,{0x1,0x2,0x3,0x4,0x5,0x6,0x7,0x8}}")
            .is_none()
    );
    assert!(Guid::try_parse("12345678-9abc-def0-1234-56789abcdef0").is_some());
}

#[test]
fn ordering_is_field_wise() {
    // A field-wise compare consults `a` before any trailing byte; a
    // big-endian 128-bit blob compare over the little-endian wire layout
    // reaches the opposite verdict for this pair.
    let hi = Guid::from_fields(0x0000_0100, 0, 0, [0xff; 8]);
    let lo = Guid::from_fields(0x0000_0001, 0, 0, [0x00; 8]);
    assert!(hi > lo);
    assert!(hi.to_bytes() < lo.to_bytes());

    let mut sorted = vec![hi, lo, Guid::NIL];
    sorted.sort();
    assert_eq!(sorted, vec![Guid::NIL, lo, hi]);
}

#[test]
fn hex_crate_agrees_on_simple_format() {
    let bytes: [u8; 16] = *b"\x12\x34\x56\x78\x9a\xbc\xde\xf0\x11\x22\x33\x44\x55\x66\x77\x88";
    let guid = Guid::from_bytes_be(&bytes).unwrap();
    assert_eq!(guid.format(GuidFormat::Simple), hex::encode(bytes));
}
