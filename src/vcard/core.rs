//! Core vCard types.

/// A single vCard property (one content line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name, normalized to uppercase.
    pub name: String,
    /// Property value, unescaped.
    pub value: String,
}

impl Property {
    /// Creates a property, normalizing the name to uppercase.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }
}

/// A vCard: an ordered list of properties framed by BEGIN/END markers on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    properties: Vec<Property>,
}

impl VCard {
    /// Creates an empty card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property, keeping insertion order.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        let name = name.to_ascii_uppercase();
        self.properties.iter().find(|p| p.name == name)
    }

    /// All properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The FN (formatted name) value, if present.
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.property(names::FN).map(|p| p.value.as_str())
    }

    /// The URL value, if present.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.property(names::URL).map(|p| p.value.as_str())
    }
}

/// Property names used by this crate.
pub mod names {
    pub const VERSION: &str = "VERSION";
    pub const FN: &str = "FN";
    pub const URL: &str = "URL";
}
