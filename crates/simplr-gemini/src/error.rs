use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Gemini API responded with status {status}")]
    Upstream { status: u16 },

    #[error("No explanation generated")]
    NoCandidates,

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl GeminiError {
    /// HTTP status the explanation endpoint answers with for this error.
    /// Upstream failures pass their status through; everything else is 500.
    pub fn status(&self) -> u16 {
        match self {
            GeminiError::Upstream { status } => *status,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        GeminiError::Transport(e.to_string())
    }
}
