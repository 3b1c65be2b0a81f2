//! Gemini `generateContent` calls.
//!
//! Auth is an API key passed as the `key` query parameter. Only the first
//! candidate's first text part is used.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::GeminiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash-latest".to_string(),
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    /// A client without a key still builds; every call then fails with
    /// [`GeminiError::MissingApiKey`].
    pub fn new(config: GeminiConfig, api_key: Option<String>) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeminiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            config,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send a single-turn prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let Some(api_key) = &self.api_key else {
            error!("GEMINI_API_KEY is not set");
            return Err(GeminiError::MissingApiKey);
        };

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        debug!(model = %self.config.model, prompt_len = prompt.len(), "calling generateContent");

        let resp = self
            .http
            .post(self.generate_url())
            .query(&[("key", api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            error!(status = status.as_u16(), detail = %detail, "Gemini API error");
            return Err(GeminiError::Upstream {
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)?;

        let Some(first) = parsed.candidates.into_iter().next() else {
            error!("no explanation generated");
            return Err(GeminiError::NoCandidates);
        };

        let text = first
            .content
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| GeminiError::ResponseParse("candidate has no text part".to_string()))?;

        info!(model = %self.config.model, text_len = text.len(), "explanation generated");

        Ok(text)
    }
}
