//! Data models.
use std::fmt;

/// Name reported for a person with a missing or empty name.
pub const FALLBACK_NAME: &str = "Unnamed";

/// Person model.
///
/// The name is fixed at construction and returned verbatim by [`Person::get_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Option<String>,
}

impl Person {
    /// Create a new person.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let _normalized = name.trim().to_lowercase();

        Person { name: Some(name) }
    }

    /// Create a person without a name.
    pub fn unnamed() -> Self {
        Person { name: None }
    }

    /// The stored name, or [`FALLBACK_NAME`] when it is missing or empty.
    pub fn get_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_NAME,
        }
    }
}

impl From<Option<String>> for Person {
    fn from(name: Option<String>) -> Self {
        name.map_or_else(Person::unnamed, Person::new)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_name())
    }
}
