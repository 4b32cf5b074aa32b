//! vCard serialization.
//!
//! Emits CRLF-terminated content lines with RFC 6350 text escaping and
//! 75-octet line folding.

use super::core::VCard;

/// Maximum content line length in octets (not characters) per RFC 6350.
const MAX_LINE_OCTETS: usize = 75;

/// Serializes cards to the vCard wire format.
///
/// One BEGIN/END frame per card, properties in insertion order.
#[must_use]
pub fn serialize(cards: &[VCard]) -> String {
    let mut out = String::new();

    for card in cards {
        out.push_str("BEGIN:VCARD\r\n");
        for prop in card.properties() {
            let line = format!("{}:{}", prop.name, escape_text(&prop.value));
            out.push_str(&fold_line(&line));
            out.push_str("\r\n");
        }
        out.push_str("END:VCARD\r\n");
    }

    out
}

/// Escapes a text value per RFC 6350 §3.4.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }

    out
}

/// Folds a content line to the 75-octet limit.
///
/// Continuation lines start with a single space that counts against the
/// limit. Folds only at UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 8);
    let mut remaining = MAX_LINE_OCTETS;

    for c in line.chars() {
        let width = c.len_utf8();
        if width > remaining {
            out.push_str("\r\n ");
            remaining = MAX_LINE_OCTETS - 1;
        }
        out.push(c);
        remaining -= width;
    }

    out
}
