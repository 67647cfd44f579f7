//! # Coreval GUID - 128-bit identifier value type and text codec
//!
//! ## Purpose
//!
//! Immutable 16-byte GUID value with bidirectional conversion between the
//! canonical Microsoft field layout and five textual formats (`N`, `D`,
//! `B`, `P`, `X`), plus binary emission with explicit endianness control.
//! Parsing is strict and categorical: every malformed input maps to a
//! stable [`GuidError`] variant, with numeric overflow kept distinct from
//! format violations.
//!
//! ## Quick Start
//!
//! ```rust
//! use coreval_guid::{Guid, GuidFormat};
//!
//! let guid = Guid::parse("{12345678-9abc-def0-1234-56789abcdef0}")?;
//! assert_eq!(guid.format(GuidFormat::Simple).len(), 32);
//!
//! // Probing parse never errors outward.
//! assert!(Guid::try_parse("not a guid").is_none());
//!
//! // Binary layout: historical little-endian by default, RFC 4122
//! // big-endian on request. The trailing eight bytes never move.
//! let wire = guid.to_bytes();
//! assert_eq!(Guid::from_bytes(&wire)?, guid);
//! # Ok::<(), coreval_guid::GuidError>(())
//! ```
//!
//! ## Architecture Role
//!
//! ```text
//! Text (N/D/B/P/X) ⇄ [parser / format] ⇄ Guid value ⇄ [byte layout] ⇄ Wire
//! ```
//!
//! The crate is a pure value-type engine: no shared state, every call
//! independent and safe to issue concurrently from any number of threads.

pub mod error;
pub mod format;
pub mod guid;
pub mod parser;

pub use error::{GuidError, GuidResult};
pub use guid::Guid;
pub use parser::{parse, parse_exact, GuidFormat};
