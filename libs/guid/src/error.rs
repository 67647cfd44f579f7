//! Error types for GUID text parsing and binary conversion.
//!
//! Every failure is categorical and stable so callers can assert on the
//! failure kind, not just on failure. Offsets are byte offsets into the
//! trimmed input handed to the decoder.

use thiserror::Error;

/// Errors produced while decoding GUID text or byte input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuidError {
    /// Input text has the wrong total length for the selected format.
    #[error("invalid GUID length: expected {expected} characters, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// A character that is not a hexadecimal digit where one was required.
    #[error("invalid hex character at offset {offset}")]
    UnexpectedCharacter { offset: usize },

    /// A dash was missing or misplaced in the hyphenated shape.
    #[error("dash missing or misplaced at offset {offset}")]
    DashPosition { offset: usize },

    /// Expected an opening brace or parenthesis that was absent or wrong.
    #[error("missing or mismatched opening brace")]
    MissingBrace,

    /// The closing brace or parenthesis was absent or wrong.
    #[error("missing end brace")]
    MissingEndBrace,

    /// A comma separating hex groups was missing (X format).
    #[error("expected comma at offset {offset}")]
    MissingComma { offset: usize },

    /// A hex group lacked its `0x` prefix (X format).
    #[error("expected 0x prefix at offset {offset}")]
    MissingHexPrefix { offset: usize },

    /// Well-formed value followed by extra characters.
    #[error("extra characters after GUID")]
    TrailingCharacters,

    /// A hex group held more significant digits than its field can store.
    #[error("hex group {group} overflows its field")]
    HexGroupOverflow { group: usize },

    /// The input matched none of the recognized textual shapes.
    #[error("unrecognized GUID format")]
    UnrecognizedFormat,

    /// A format selector other than N, D, B, P or X.
    #[error("invalid format selector '{found}'")]
    InvalidFormatSelector { found: char },

    /// A byte-slice conversion was given something other than 16 bytes.
    #[error("invalid GUID byte count: expected 16, got {got}")]
    InvalidByteCount { got: usize },
}

impl GuidError {
    /// True for numeric-overflow failures, false for every format failure.
    ///
    /// Probing entry points collapse both categories into `None`; strict
    /// entry points surface the distinction through this predicate.
    pub fn is_overflow(&self) -> bool {
        matches!(self, GuidError::HexGroupOverflow { .. })
    }
}

/// Result type for GUID codec operations.
pub type GuidResult<T> = std::result::Result<T, GuidError>;
