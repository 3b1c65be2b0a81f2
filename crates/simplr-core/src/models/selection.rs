use serde::{Deserialize, Serialize};

use super::entry::RepositoryEntry;

/// Files chosen for the report, unique by path, in the order they were
/// picked. That order is the print order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    entries: Vec<RepositoryEntry>,
}

/// What a call to [`SelectionSet::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    Added,
    Removed,
    /// The entry was not a file and cannot be selected.
    Ignored,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a file that is not yet selected, or deselect one that is.
    pub fn toggle(&mut self, entry: &RepositoryEntry) -> Toggle {
        if !entry.is_file() {
            return Toggle::Ignored;
        }

        if let Some(pos) = self.entries.iter().position(|e| e.path == entry.path) {
            self.entries.remove(pos);
            Toggle::Removed
        } else {
            self.entries.push(entry.clone());
            Toggle::Added
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepositoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Owned copy in insertion order, detached from later toggles.
    pub fn snapshot(&self) -> Vec<RepositoryEntry> {
        self.entries.clone()
    }
}
