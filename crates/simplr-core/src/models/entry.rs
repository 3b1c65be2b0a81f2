use serde::{Deserialize, Serialize};

/// One item of a repository directory listing.
///
/// Identity is the full `path`; `name` is only its last segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules and anything else the hosting API may report.
    #[serde(other)]
    Other,
}

impl RepositoryEntry {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Order a listing the way the browser shows it: directories first, then
/// files, each group by name.
pub fn sort_listing(entries: &mut [RepositoryEntry]) {
    entries.sort_by(|a, b| {
        let rank = |e: &RepositoryEntry| match e.kind {
            EntryKind::Dir => 0,
            EntryKind::File => 1,
            EntryKind::Other => 2,
        };
        rank(a).cmp(&rank(b)).then_with(|| a.name.cmp(&b.name))
    });
}
