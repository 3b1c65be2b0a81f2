//! The seam between report composition and wherever file text comes from.

use std::future::Future;

/// Result of fetching one file's text. A failed or empty fetch is not an
/// error: the file is simply left out of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(String),
    Missing { reason: String },
}

impl FetchOutcome {
    /// Normalize an empty body into `Missing`.
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            FetchOutcome::Missing {
                reason: "empty file".to_string(),
            }
        } else {
            FetchOutcome::Loaded(text)
        }
    }
}

/// Something that can hand back the text of a repository file by path.
pub trait FileSource {
    fn fetch_text(&self, path: &str) -> impl Future<Output = FetchOutcome> + Send;
}
