//! Searchable record abstraction

use serde::{Deserialize, Serialize};

/// Read-only view of a record the engine can score.
///
/// Records are owned by the caller; the engine only borrows them for the
/// duration of a search. `Sync` lets a slice of records be scored on a
/// thread pool.
pub trait Searchable: Sync {
    fn name(&self) -> &str;

    fn tags(&self) -> &[String];

    /// Free-form note, if the record has one
    fn note(&self) -> Option<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn note(&self) -> Option<&str> {
        (**self).note()
    }
}

/// An address-book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: Vec::new(),
            note: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Searchable for Contact {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
