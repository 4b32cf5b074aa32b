//! vCard export of rooms.
//!
//! Maps each room to a contact record (formatted name plus meeting URL)
//! and writes the serialized records to a destination file.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rooms::Room;
use crate::vcard::{self, Property, VCard, names};

/// Errors produced while writing a vCard export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Export rooms as vCard records to `destination`.
///
/// One record per room, in input order, with the formatted name set to
/// `prefix` + room name and the URL taken from the room's meeting. The
/// destination is created or truncated. Partial output is left in place
/// if a write fails mid-stream. Returns the handle to the written file.
pub fn export(rooms: &[Room], destination: &Path, prefix: &str) -> Result<File, ExportError> {
    let io_err = |source| ExportError::Io {
        path: destination.to_path_buf(),
        source,
    };

    let cards: Vec<VCard> = rooms
        .iter()
        .map(|room| contact_card(room, prefix))
        .collect();

    let mut file = File::create(destination).map_err(io_err)?;
    file.write_all(vcard::serialize(&cards).as_bytes())
        .map_err(io_err)?;
    file.flush().map_err(io_err)?;

    Ok(file)
}

/// Build the contact record for one room.
fn contact_card(room: &Room, prefix: &str) -> VCard {
    let mut card = VCard::new();
    card.add_property(Property::new(names::VERSION, "4.0"));
    card.add_property(Property::new(names::FN, format!("{}{}", prefix, room.name)));
    card.add_property(Property::new(names::URL, room.meeting.url()));
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_card_fields() {
        let card = contact_card(&Room::new("foo_1", "12345"), "");
        assert_eq!(card.property(names::VERSION).unwrap().value, "4.0");
        assert_eq!(card.formatted_name(), Some("foo_1"));
        assert_eq!(card.url(), Some("https://bluejeans.com/12345"));
    }

    #[test]
    fn test_contact_card_applies_prefix() {
        let card = contact_card(&Room::new("foo_1", "12345"), "acme-");
        assert_eq!(card.formatted_name(), Some("acme-foo_1"));
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let dest = temp.path().join("missing").join("rooms.vcf");
        let result = export(&[Room::new("foo", "1")], &dest, "");
        assert!(matches!(result, Err(ExportError::Io { .. })));
    }
}
