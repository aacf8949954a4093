/// Data model for the directory list
///
/// An ordered list of directory paths, most recently used first.

use crate::core::matcher;

/// Most-recently-used list of directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirList {
    entries: Vec<String>,
}

impl DirList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from entries already in MRU order
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, dir: &str) -> bool {
        self.entries.iter().any(|entry| entry == dir)
    }

    /// Move `dir` to the front, inserting it if it isn't there yet
    ///
    /// The other entries keep their relative order.
    pub fn promote(&mut self, dir: &str) {
        if let Some(pos) = self.entries.iter().position(|entry| entry == dir) {
            let existing = self.entries.remove(pos);
            self.entries.insert(0, existing);
        } else {
            self.entries.insert(0, dir.to_string());
        }
    }

    /// First entry whose last component starts with `query`, ignoring case
    pub fn find_match(&self, query: &str) -> Option<&str> {
        matcher::find_match(query, &self.entries)
    }
}

impl From<Vec<String>> for DirList {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}
