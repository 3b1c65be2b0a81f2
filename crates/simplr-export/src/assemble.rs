//! Phase one of report generation: resolve every selected file to text.

use simplr_core::models::entry::RepositoryEntry;
use simplr_core::source::{FetchOutcome, FileSource};
use tracing::{debug, info};

/// A selected file after fetching. Skipped files stay in the list so the
/// decision is visible, but print nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFile {
    Loaded { name: String, text: String },
    Skipped { name: String, reason: String },
}

impl SourceFile {
    pub fn loaded(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceFile::Loaded {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SourceFile::Loaded { name, .. } | SourceFile::Skipped { name, .. } => name,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SourceFile::Loaded { .. })
    }
}

/// Fetch `entries` one at a time, in order. A failed or empty fetch becomes
/// `Skipped`; nothing here fails the report.
pub async fn gather<S: FileSource>(source: &S, entries: &[RepositoryEntry]) -> Vec<SourceFile> {
    let mut files = Vec::with_capacity(entries.len());

    for entry in entries {
        let file = match source.fetch_text(&entry.path).await {
            FetchOutcome::Loaded(text) => SourceFile::Loaded {
                name: entry.name.clone(),
                text,
            },
            FetchOutcome::Missing { reason } => {
                debug!(path = %entry.path, %reason, "skipping file");
                SourceFile::Skipped {
                    name: entry.name.clone(),
                    reason,
                }
            }
        };
        files.push(file);
    }

    let loaded = files.iter().filter(|f| f.is_loaded()).count();
    info!(selected = entries.len(), loaded, "report sources gathered");
    files
}
