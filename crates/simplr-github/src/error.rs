use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("Failed to fetch contents")]
    Listing { status: u16 },

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to fetch file content")]
    Raw { status: u16 },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for GithubError {
    fn from(e: reqwest::Error) -> Self {
        GithubError::Transport(e.to_string())
    }
}
