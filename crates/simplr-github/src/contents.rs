use serde::Deserialize;
use simplr_core::models::entry::{RepositoryEntry, sort_listing};
use simplr_core::source::{FetchOutcome, FileSource};
use tracing::{debug, warn};

use crate::client::GithubClient;
use crate::error::GithubError;

/// The contents endpoint answers with an array for a directory and a single
/// object for a file.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsBody {
    Dir(Vec<RepositoryEntry>),
    Single(RepositoryEntry),
}

/// List a directory of a repository. Directories come first, then files.
pub async fn list_contents(
    client: &GithubClient,
    repo: &str,
    path: &str,
) -> Result<Vec<RepositoryEntry>, GithubError> {
    let url = client.contents_url(repo, path)?;
    debug!(%url, "listing repository contents");

    let mut req = client
        .http
        .get(url)
        .header("Accept", "application/vnd.github+json");
    if let Some(token) = &client.config.token {
        req = req.bearer_auth(token);
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        warn!(repo, path, status = status.as_u16(), "contents listing failed");
        return Err(GithubError::Listing {
            status: status.as_u16(),
        });
    }

    let bytes = resp.bytes().await?;
    match serde_json::from_slice::<ContentsBody>(&bytes)? {
        ContentsBody::Dir(mut entries) => {
            sort_listing(&mut entries);
            Ok(entries)
        }
        ContentsBody::Single(entry) => Err(GithubError::NotADirectory(entry.path)),
    }
}

/// Fetch the raw text of one file.
pub async fn fetch_raw(
    client: &GithubClient,
    repo: &str,
    path: &str,
) -> Result<String, GithubError> {
    let url = client.raw_url(repo, path)?;
    debug!(%url, "fetching raw file");

    let resp = client.http.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(GithubError::Raw {
            status: status.as_u16(),
        });
    }

    Ok(resp.text().await?)
}

/// Fetch a file for report composition. Failures are logged and reported as
/// `Missing` instead of being raised.
pub async fn fetch_text(client: &GithubClient, repo: &str, path: &str) -> FetchOutcome {
    match fetch_raw(client, repo, path).await {
        Ok(text) => FetchOutcome::from_text(text),
        Err(e) => {
            warn!(repo, path, error = %e, "file fetch failed, skipping");
            FetchOutcome::Missing {
                reason: e.to_string(),
            }
        }
    }
}

/// A [`GithubClient`] bound to one repository.
#[derive(Debug, Clone, Copy)]
pub struct RepoFiles<'a> {
    pub client: &'a GithubClient,
    pub repo: &'a str,
}

impl FileSource for RepoFiles<'_> {
    async fn fetch_text(&self, path: &str) -> FetchOutcome {
        fetch_text(self.client, self.repo, path).await
    }
}
