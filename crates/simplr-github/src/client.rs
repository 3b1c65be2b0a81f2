use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::GithubError;

/// Where repositories live and how to reach them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// REST API root, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Raw-content root, e.g. `https://raw.githubusercontent.com`.
    pub raw_base: String,
    /// Account that owns every lab repository.
    pub owner: String,
    pub branch: String,
    /// The REST API rejects requests without a User-Agent.
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Optional token, sent only to the REST API.
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com".to_string(),
            owner: "Xrg360".to_string(),
            branch: "master".to_string(),
            user_agent: concat!("simplr/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            token: None,
        }
    }
}

/// Shared HTTP client for both GitHub hosts. Cheap to clone.
#[derive(Debug, Clone)]
pub struct GithubClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GithubError::Client(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// `{api_base}/repos/{owner}/{repo}/contents/{path}`
    pub fn contents_url(&self, repo: &str, path: &str) -> Result<Url, GithubError> {
        build_url(
            &self.config.api_base,
            ["repos", self.config.owner.as_str(), repo, "contents"],
            path,
        )
    }

    /// `{raw_base}/{owner}/{repo}/{branch}/{path}`
    pub fn raw_url(&self, repo: &str, path: &str) -> Result<Url, GithubError> {
        build_url(
            &self.config.raw_base,
            [self.config.owner.as_str(), repo, self.config.branch.as_str()],
            path,
        )
    }
}

/// Append fixed segments and then each segment of `path`, percent-encoding
/// as needed. Empty segments are dropped, so the root path adds nothing.
fn build_url<'a>(
    base: &str,
    fixed: impl IntoIterator<Item = &'a str>,
    path: &str,
) -> Result<Url, GithubError> {
    let mut url = Url::parse(base.trim_end_matches('/'))
        .map_err(|e| GithubError::InvalidUrl(format!("{base}: {e}")))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| GithubError::InvalidUrl(format!("{base}: cannot be a base")))?;
        segments.pop_if_empty();
        segments.extend(fixed);
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }

    Ok(url)
}
