//! Room directory: named rooms bound to meeting references.
//!
//! - [`source`] - resolves where the rooms list comes from
//! - [`loader`] - fetches and parses the list into a [`RoomDirectory`]
//!
//! The directory is an explicit owned container handed to lookup and
//! export call sites; there is no process-wide room list.

pub mod loader;
pub mod source;

pub use loader::{LoadOutcome, LoadStatus};
pub use source::{is_url, resolve_source};

use crate::error::{DirectoryError, DirectoryResult};
use crate::meeting::Meeting;

/// One directory entry: a named room bound to a meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Display and lookup key. Matched case-insensitively; uniqueness is
    /// not enforced.
    pub name: String,
    /// The meeting this room dials into.
    pub meeting: Meeting,
}

impl Room {
    /// Create a room from a name and a raw meeting identifier.
    pub fn new(name: impl Into<String>, meeting_id: &str) -> Self {
        Self {
            name: name.into(),
            meeting: Meeting::new(meeting_id),
        }
    }
}

/// In-memory, ordered collection of the currently loaded rooms.
///
/// Entry order matches source order and duplicates are kept. Contents are
/// replaced wholesale on each load; there is no incremental merge.
#[derive(Debug, Clone, Default)]
pub struct RoomDirectory {
    rooms: Vec<Room>,
}

impl RoomDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the given rooms.
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Replace the directory contents wholesale.
    pub fn replace(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
    }

    /// All rooms in load order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Find a room by name, case-insensitively.
    ///
    /// Linear scan in load order; the first match wins when names repeat.
    pub fn find(&self, name: &str) -> DirectoryResult<&Room> {
        let folded = name.to_lowercase();
        self.rooms
            .iter()
            .find(|room| room.name.to_lowercase() == folded)
            .ok_or_else(|| DirectoryError::room_not_found(name))
    }
}
