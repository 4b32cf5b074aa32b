//! Denim room directory library.
//!
//! Maintains a list of named meeting rooms loaded from a local file or a
//! remote URL, resolves rooms by name case-insensitively, and exports
//! rooms as vCard contact records.

pub mod cli;
pub mod error;
pub mod export;
pub mod meeting;
pub mod rooms;
pub mod vcard;
