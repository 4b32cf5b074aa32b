//! Export subcommand for the denim CLI.

use clap::Args;
use std::path::PathBuf;

use crate::error::DirectoryResult;
use crate::rooms::{Room, RoomDirectory};

/// Arguments for the export subcommand
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Prefix applied to every exported contact name
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Export only the named rooms (repeatable); defaults to all rooms
    #[arg(short, long, value_name = "NAME")]
    pub room: Vec<String>,
}

impl ExportArgs {
    /// Resolve the rooms to export against the directory.
    ///
    /// With no `--room` filters the whole directory is exported;
    /// otherwise the named rooms, in the order given on the command line.
    /// An unknown name is an error.
    pub fn select(&self, directory: &RoomDirectory) -> DirectoryResult<Vec<Room>> {
        if self.room.is_empty() {
            return Ok(directory.rooms().to_vec());
        }

        self.room
            .iter()
            .map(|name| directory.find(name).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn args(rooms: &[&str]) -> ExportArgs {
        ExportArgs {
            output: PathBuf::from("rooms.vcf"),
            prefix: String::new(),
            room: rooms.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    fn directory() -> RoomDirectory {
        RoomDirectory::from_rooms(vec![
            Room::new("foo", "11111"),
            Room::new("bar", "22222"),
        ])
    }

    #[test]
    fn test_select_defaults_to_all_rooms() {
        let selected = args(&[]).select(&directory()).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_select_named_subset_in_given_order() {
        let selected = args(&["bar", "FOO"]).select(&directory()).unwrap();
        let names: Vec<&str> = selected.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["bar", "foo"]);
    }

    #[test]
    fn test_select_unknown_room_is_an_error() {
        let err = args(&["baz"]).select(&directory()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }
}
