//! Meeting references.
//!
//! A [`Meeting`] wraps the raw identifier from a rooms file and derives the
//! dialable URL from it. It carries no state beyond the identifier.

/// Base URL that meeting identifiers dial into.
pub const BASE_URL: &str = "https://bluejeans.com";

/// An opaque reference to a video meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    id: String,
}

impl Meeting {
    /// Create a meeting reference from a raw identifier.
    ///
    /// The identifier format is not validated.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The raw meeting identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The dialable URL for this meeting.
    pub fn url(&self) -> String {
        format!("{}/{}", BASE_URL, self.id)
    }
}
