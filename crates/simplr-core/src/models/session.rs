use serde::{Deserialize, Serialize};

use super::entry::{EntryKind, RepositoryEntry};
use super::metadata::ReportMetadata;
use super::selection::{SelectionSet, Toggle};
use crate::paths;

/// Browse state for one user working on one repository.
///
/// Selection is global to the session: moving between directories never
/// touches files already picked elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseSession {
    pub repo: String,
    pub current_path: String,
    pub selection: SelectionSet,
    pub metadata: ReportMetadata,
}

/// Outcome of clicking an entry in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Opened {
    Toggled { toggle: Toggle },
    Entered { path: String },
    Ignored,
}

/// Everything report generation needs, copied out of the session so later
/// clicks cannot change a report that is already being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub repo: String,
    pub metadata: ReportMetadata,
    pub files: Vec<RepositoryEntry>,
}

impl BrowseSession {
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            current_path: String::new(),
            selection: SelectionSet::new(),
            metadata: ReportMetadata::default(),
        }
    }

    /// Files toggle in and out of the selection; directories become the
    /// current path and lend their name to the experiment label.
    pub fn open(&mut self, entry: &RepositoryEntry) -> Opened {
        match entry.kind {
            EntryKind::File => Opened::Toggled {
                toggle: self.selection.toggle(entry),
            },
            EntryKind::Dir => {
                self.current_path = entry.path.trim_matches('/').to_string();
                self.metadata.experiment_label = entry.name.clone();
                Opened::Entered {
                    path: self.current_path.clone(),
                }
            }
            EntryKind::Other => Opened::Ignored,
        }
    }

    /// Move to the parent directory. Returns `false` at the root, where the
    /// path is left as it is.
    pub fn back(&mut self) -> bool {
        if paths::is_root(&self.current_path) {
            self.current_path.clear();
            return false;
        }
        self.current_path = paths::parent(&self.current_path);
        true
    }

    pub fn snapshot(&self) -> ReportRequest {
        ReportRequest {
            repo: self.repo.clone(),
            metadata: self.metadata.clone(),
            files: self.selection.snapshot(),
        }
    }

    /// Called once a report has been handed to the user.
    pub fn finish_report(&mut self) {
        self.selection.clear();
    }
}
