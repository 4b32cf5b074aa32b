//! End-to-end export tests: write vCards to disk, decode them, and compare
//! the structured records.

use std::fs;
use std::path::Path;

use denim::export::export;
use denim::rooms::Room;
use denim::vcard::{self, Property, VCard};
use tempfile::TempDir;

fn read_cards(path: &Path) -> Vec<VCard> {
    let content = fs::read_to_string(path).unwrap();
    vcard::parse(&content).unwrap()
}

/// The card with its FN property removed, for everything-but-the-name
/// comparisons.
fn without_fn(card: &VCard) -> Vec<Property> {
    card.properties()
        .iter()
        .filter(|p| p.name != vcard::names::FN)
        .cloned()
        .collect()
}

#[test]
fn test_export_single_room_without_prefix() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("rooms.vcf");

    export(&[Room::new("foo_1", "12345")], &dest, "").unwrap();

    let cards = read_cards(&dest);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].formatted_name(), Some("foo_1"));
    assert_eq!(cards[0].url(), Some("https://bluejeans.com/12345"));
}

#[test]
fn test_prefix_changes_only_the_formatted_name() {
    let temp = TempDir::new().unwrap();
    let plain_dest = temp.path().join("plain.vcf");
    let prefixed_dest = temp.path().join("prefixed.vcf");
    let rooms = [Room::new("foo_1", "12345")];

    export(&rooms, &plain_dest, "").unwrap();
    export(&rooms, &prefixed_dest, "foo-").unwrap();

    let plain = &read_cards(&plain_dest)[0];
    let prefixed = &read_cards(&prefixed_dest)[0];

    assert_eq!(plain.formatted_name(), Some("foo_1"));
    assert_eq!(prefixed.formatted_name(), Some("foo-foo_1"));
    assert_eq!(without_fn(plain), without_fn(prefixed));
}

#[test]
fn test_export_multiple_rooms_in_input_order() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("rooms.vcf");
    let rooms = [
        Room::new("foo_1", "12345"),
        Room::new("bar_1", "12345"),
        Room::new("baz_1", "98765"),
    ];

    export(&rooms, &dest, "x-").unwrap();

    let cards = read_cards(&dest);
    let names: Vec<_> = cards.iter().map(|c| c.formatted_name().unwrap()).collect();
    assert_eq!(names, ["x-foo_1", "x-bar_1", "x-baz_1"]);
}

#[test]
fn test_round_trip_preserves_name_and_url() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("rooms.vcf");
    // Name with characters the wire format must escape.
    let rooms = [Room::new("conf; floor 2, east", "55555")];

    export(&rooms, &dest, "").unwrap();

    let card = &read_cards(&dest)[0];
    assert_eq!(card.formatted_name(), Some("conf; floor 2, east"));
    assert_eq!(card.url(), Some("https://bluejeans.com/55555"));
}

#[test]
fn test_export_truncates_existing_file() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("rooms.vcf");

    export(
        &[Room::new("foo", "1"), Room::new("bar", "2")],
        &dest,
        "",
    )
    .unwrap();
    export(&[Room::new("baz", "3")], &dest, "").unwrap();

    let cards = read_cards(&dest);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].formatted_name(), Some("baz"));
}

#[test]
fn test_export_returns_handle_to_written_file() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("rooms.vcf");

    let file = export(&[Room::new("foo", "1")], &dest, "").unwrap();

    let written = file.metadata().unwrap().len();
    assert!(written > 0);
    assert_eq!(written, fs::metadata(&dest).unwrap().len());
}
