//! vCard codec (RFC 6350 subset).
//!
//! Contact records as ordered property lists framed by BEGIN/END markers,
//! with CRLF line endings, text escaping, and 75-octet line folding.
//!
//! ## Serializing
//!
//! ```rust
//! use denim::vcard::{Property, VCard, names, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(Property::new(names::FN, "Room A"));
//! card.add_property(Property::new(names::URL, "https://example.com/1"));
//!
//! let output = serialize(&[card]);
//! assert!(output.contains("FN:Room A"));
//! ```
//!
//! ## Parsing
//!
//! ```rust
//! use denim::vcard::parse;
//!
//! let input = "BEGIN:VCARD\r\nFN:Room A\r\nEND:VCARD\r\n";
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("Room A"));
//! ```
//!
//! Parsing is lenient: parameters and property groups are accepted and
//! ignored, and bare LF line endings are tolerated. decode(encode(card))
//! reproduces the card's name/value pairs.

pub mod build;
pub mod core;
pub mod parse;

pub use build::serialize;
pub use core::{Property, VCard, names};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse, parse_single};
