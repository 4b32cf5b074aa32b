//! Rooms list loading.
//!
//! Fetches the resolved source (local file or HTTP URL) and parses the
//! line-oriented rooms format: one room per line, whitespace-separated
//! `<name> <meeting-id>`, columns past the second ignored. Malformed lines
//! are dropped rather than failing the load, and an unreadable source
//! degrades to an empty directory instead of an error.

use std::fs;

use tracing::{debug, warn};

use super::source::{is_url, resolve_source};
use super::{Room, RoomDirectory};
use crate::error::{DirectoryError, DirectoryResult};

/// How a load attempt concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The source was read and parsed.
    Loaded,
    /// No source is configured; the directory is empty.
    NoSource,
    /// The source could not be read; the directory is empty.
    Unreadable,
}

/// Result of a load attempt.
///
/// Loading never fails outright. This records what happened so callers can
/// tell an empty rooms file from a missing or unreadable one.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub status: LoadStatus,
    /// The resolved source, if any.
    pub source: Option<String>,
    /// Rooms loaded into the directory.
    pub loaded: usize,
    /// Malformed lines dropped during parsing.
    pub skipped: usize,
}

impl RoomDirectory {
    /// Load rooms from the source resolved from the environment.
    ///
    /// The directory contents are replaced wholesale. On a missing or
    /// unreadable source the directory is left empty rather than keeping
    /// the previous load's contents.
    pub fn load(&mut self) -> LoadOutcome {
        self.load_resolved(resolve_source())
    }

    /// Load rooms from an explicit source path or URL.
    pub fn load_from(&mut self, source: &str) -> LoadOutcome {
        match fetch(source) {
            Ok(content) => {
                let (rooms, skipped) = parse_rooms(&content);
                if skipped > 0 {
                    debug!(source, skipped, "dropped malformed room lines");
                }
                let loaded = rooms.len();
                self.replace(rooms);
                LoadOutcome {
                    status: LoadStatus::Loaded,
                    source: Some(source.to_string()),
                    loaded,
                    skipped,
                }
            }
            Err(err) => {
                warn!("{}", err);
                self.replace(Vec::new());
                LoadOutcome {
                    status: LoadStatus::Unreadable,
                    source: Some(source.to_string()),
                    loaded: 0,
                    skipped: 0,
                }
            }
        }
    }

    fn load_resolved(&mut self, source: Option<String>) -> LoadOutcome {
        match source {
            Some(source) => self.load_from(&source),
            None => {
                self.replace(Vec::new());
                LoadOutcome {
                    status: LoadStatus::NoSource,
                    source: None,
                    loaded: 0,
                    skipped: 0,
                }
            }
        }
    }
}

/// Read the source contents, from disk or over HTTP.
fn fetch(source: &str) -> DirectoryResult<String> {
    if is_url(source) {
        let response = reqwest::blocking::get(source)
            .and_then(|response| response.error_for_status())
            .map_err(|err| DirectoryError::source_unreadable(source, &err))?;
        response
            .text()
            .map_err(|err| DirectoryError::source_unreadable(source, &err))
    } else {
        fs::read_to_string(source)
            .map_err(|err| DirectoryError::source_unreadable(source, &err))
    }
}

/// Parse rooms file content into rooms plus a dropped-line tally.
///
/// Handles both LF and CRLF line endings. Blank lines contribute nothing;
/// lines with fewer than two columns are counted as skipped.
fn parse_rooms(content: &str) -> (Vec<Room>, usize) {
    let mut rooms = Vec::new();
    let mut skipped = 0;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(name), Some(id)) => rooms.push(Room::new(name, id)),
            _ => skipped += 1,
        }
    }

    (rooms, skipped)
}
