use std::path::{Path, PathBuf};

use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use simplr_export::styles::ReportStyle;
use simplr_gemini::client::GeminiConfig;
use simplr_github::client::GithubConfig;

/// Top-level configuration. Every section and field has a default, so an
/// empty or missing file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: HttpConfig,
    pub github: GithubConfig,
    pub gemini: GeminiConfig,
    pub report: ReportConfig,

    /// Only ever read from `GEMINI_API_KEY`.
    #[serde(skip)]
    pub gemini_api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Served under `/static`.
    pub static_dir: PathBuf,
    pub log_json: bool,
    /// Sessions untouched for this long are dropped.
    pub session_idle_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("assets"),
            log_json: false,
            session_idle_secs: 3600,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub trailer_image: PathBuf,
    #[serde(flatten)]
    pub style: ReportStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trailer_image: PathBuf::from("assets/continuouseval.png"),
            style: ReportStyle::default(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML file.
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).wrap_err_with(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> eyre::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path` if it exists, otherwise start from defaults. A file
    /// that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> eyre::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> eyre::Result<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable lookup.
    pub fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> eyre::Result<()> {
        if let Some(key) = var("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.gemini_api_key = Some(key);
        }
        if let Some(host) = var("SIMPLR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("SIMPLR_PORT") {
            self.server.port = port
                .parse()
                .wrap_err_with(|| format!("SIMPLR_PORT is not a port number: {port}"))?;
        }
        if let Some(token) = var("SIMPLR_GITHUB_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.github.token = Some(token);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
