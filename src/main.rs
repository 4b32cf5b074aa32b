//! Denim: meeting room directory and dialer.
//!
//! Loads the room list from the configured source, then resolves, lists,
//! or exports rooms from it.

use anyhow::Result;
use clap::Parser;
use tracing::{Level, debug, warn};
use tracing_subscriber::FmtSubscriber;

use denim::cli::{Cli, Command};
use denim::export::export;
use denim::rooms::{LoadStatus, RoomDirectory};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut directory = RoomDirectory::new();
    let outcome = directory.load();
    match outcome.status {
        LoadStatus::Loaded => debug!(
            source = outcome.source.as_deref().unwrap_or(""),
            loaded = outcome.loaded,
            skipped = outcome.skipped,
            "room directory loaded"
        ),
        LoadStatus::NoSource => {
            warn!("no rooms source configured; set DENIM_ROOMS, DENIM_HOME, or HOME");
        }
        // The loader already warned with the source and reason.
        LoadStatus::Unreadable => {}
    }

    match cli.command {
        Command::Find { name } => {
            let room = directory.find(&name)?;
            println!("{}", room.meeting.url());
        }
        Command::List => {
            for room in directory.rooms() {
                println!("{}\t{}", room.name, room.meeting.url());
            }
        }
        Command::Export(args) => {
            let rooms = args.select(&directory)?;
            export(&rooms, &args.output, &args.prefix)?;
            println!("exported {} room(s) to {}", rooms.len(), args.output.display());
        }
    }

    Ok(())
}
