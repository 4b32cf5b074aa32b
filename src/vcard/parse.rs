//! vCard parsing.
//!
//! Lenient parsing of the subset this crate emits: line unfolding, content
//! line splitting, text unescaping, and BEGIN/END framing. Parameters and
//! property groups are accepted and ignored. Bare LF line endings are
//! tolerated alongside CRLF.

use std::fmt;

use super::core::{Property, VCard};

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during vCard parsing.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates an unexpected token error.
    #[must_use]
    pub fn unexpected(line: usize, expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            line,
            format!("expected {expected}, found {found}"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Unexpected end of input.
    UnexpectedEof,
    /// Unexpected token or content line.
    UnexpectedToken,
    /// Content line without a colon separator.
    MissingSeparator,
    /// Invalid property name.
    InvalidPropertyName,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::UnexpectedToken => write!(f, "unexpected token"),
            Self::MissingSeparator => write!(f, "missing colon separator"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
        }
    }
}

/// Unfolds a vCard document by removing line continuations.
///
/// A continuation is a CRLF (or bare LF) followed by a single space or tab;
/// the break and the whitespace char are removed.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    out.push('\n');
                }
            } else {
                out.push(c);
            }
        } else if c == '\n' {
            if matches!(chars.peek(), Some(' ' | '\t')) {
                chars.next();
            } else {
                out.push('\n');
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Unescapes a text value per RFC 6350 §3.4.
///
/// Unknown escape sequences keep the escaped character.
#[must_use]
pub fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Parses a document into cards.
///
/// ## Errors
/// Returns an error on malformed content lines, properties outside a
/// BEGIN/END frame, or an unterminated card.
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    let unfolded = unfold(input);
    let mut cards = Vec::new();
    let mut current: Option<VCard> = None;

    for (idx, line) in unfolded.lines().enumerate() {
        let line_num = idx + 1;
        if line.is_empty() {
            continue;
        }

        let (name, value) = split_content_line(line, line_num)?;

        if name.eq_ignore_ascii_case("BEGIN") {
            if !value.eq_ignore_ascii_case("VCARD") {
                return Err(ParseError::unexpected(line_num, "BEGIN:VCARD", line));
            }
            if current.is_some() {
                return Err(ParseError::unexpected(line_num, "END:VCARD", line));
            }
            current = Some(VCard::new());
        } else if name.eq_ignore_ascii_case("END") {
            match current.take() {
                Some(card) => cards.push(card),
                None => {
                    return Err(ParseError::unexpected(line_num, "BEGIN:VCARD", line));
                }
            }
        } else {
            match current {
                Some(ref mut card) => {
                    card.add_property(Property::new(name, unescape_text(value)));
                }
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedToken,
                        line_num,
                        "property outside BEGIN:VCARD",
                    ));
                }
            }
        }
    }

    if current.is_some() {
        return Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            unfolded.lines().count(),
            "unterminated vCard",
        ));
    }

    Ok(cards)
}

/// Parses a document expected to contain at least one card.
///
/// ## Errors
/// Returns an error if the input is malformed or holds no cards.
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    parse(input)?.into_iter().next().ok_or_else(|| {
        ParseError::new(ParseErrorKind::UnexpectedEof, 1, "no vCard found")
    })
}

/// Splits a content line into property name and raw value.
///
/// Format: `[group.]name[;param=value]*:value`. The group and any
/// parameters are discarded.
fn split_content_line(line: &str, line_num: usize) -> ParseResult<(&str, &str)> {
    let colon = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::MissingSeparator,
            line_num,
            "missing colon separator",
        )
    })?;

    let (head, value) = line.split_at(colon);
    let value = &value[1..];

    // Drop parameters, then any group prefix.
    let name = head.split(';').next().unwrap_or(head);
    let name = name.rsplit('.').next().unwrap_or(name);

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name:?}"),
        ));
    }

    Ok((name, value))
}

/// Finds the colon separating name/parameters from the value, skipping
/// colons inside double-quoted parameter values.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcard::build::serialize;
    use crate::vcard::core::names;

    const SIMPLE: &str = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Room A\r\nURL:https://example.com/1\r\nEND:VCARD\r\n";

    #[test]
    fn parses_simple_card() {
        let cards = parse(SIMPLE).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].formatted_name(), Some("Room A"));
        assert_eq!(cards[0].url(), Some("https://example.com/1"));
    }

    #[test]
    fn tolerates_bare_lf_endings() {
        let input = SIMPLE.replace("\r\n", "\n");
        let cards = parse(&input).unwrap();
        assert_eq!(cards[0].formatted_name(), Some("Room A"));
    }

    #[test]
    fn unfold_removes_continuations() {
        assert_eq!(unfold("FN:Room\r\n  A\r\n"), "FN:Room A\n");
        assert_eq!(unfold("FN:Room\n\tA\n"), "FN:RoomA\n");
        assert_eq!(unfold("FN:Room A\r\nURL:x\r\n"), "FN:Room A\nURL:x\n");
    }

    #[test]
    fn parses_folded_property() {
        let input = "BEGIN:VCARD\r\nFN:Very Long\r\n  Name\r\nEND:VCARD\r\n";
        let cards = parse(input).unwrap();
        assert_eq!(cards[0].formatted_name(), Some("Very Long Name"));
    }

    #[test]
    fn ignores_parameters_and_groups() {
        let input =
            "BEGIN:VCARD\r\nitem1.TEL;TYPE=\"work,voice\":+1-555-0100\r\nEND:VCARD\r\n";
        let cards = parse(input).unwrap();
        let prop = cards[0].property("TEL").unwrap();
        assert_eq!(prop.value, "+1-555-0100");
    }

    #[test]
    fn unescapes_text_values() {
        let input = "BEGIN:VCARD\r\nFN:a\\,b\\;c\\\\d\\ne\r\nEND:VCARD\r\n";
        let cards = parse(input).unwrap();
        assert_eq!(cards[0].formatted_name(), Some("a,b;c\\d\ne"));
    }

    #[test]
    fn missing_colon_reports_line_number() {
        let input = "BEGIN:VCARD\r\nFN Room A\r\nEND:VCARD\r\n";
        let err = parse(input).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingSeparator);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn unterminated_card_is_an_error() {
        let err = parse("BEGIN:VCARD\r\nFN:Room A\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    }

    #[test]
    fn property_outside_card_is_an_error() {
        let err = parse("FN:Room A\r\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn parse_single_requires_a_card() {
        assert!(parse_single("").is_err());
        assert!(parse_single(SIMPLE).is_ok());
    }

    #[test]
    fn round_trip_preserves_properties() {
        let mut card = VCard::new();
        card.add_property(Property::new(names::VERSION, "4.0"));
        card.add_property(Property::new(names::FN, "Room, the \\ first"));
        card.add_property(Property::new(names::URL, "https://example.com/1"));

        let decoded = parse(&serialize(std::slice::from_ref(&card))).unwrap();
        assert_eq!(decoded, vec![card]);
    }
}
