// src/config/tools.rs
//! Tool configuration: upstream endpoints, HTTP client settings, the Hacker News
//! scan budget and keyword list, and per-tool outbound proxies.
//!
//! Lookup order:
//! 1) `$AI_NEWS_CONFIG_PATH` (must exist)
//! 2) `config/ai_news.toml`
//! 3) built-in defaults
//!
//! Proxy variables from the environment always win over a `proxy` key in the file.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG_PATH: &str = "AI_NEWS_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/ai_news.toml";

pub const ENV_HN_PROXY: &str = "BEEAI_HN_TOOL_PROXY";
pub const ENV_ARXIV_PROXY: &str = "BEEAI_ARXIV_TOOL_PROXY";
pub const ENV_HF_PAPERS_PROXY: &str = "BEEAI_HF_PAPERS_TOOL_PROXY";
pub const ENV_HF_SPACES_PROXY: &str = "BEEAI_HF_SPACES_TOOL_PROXY";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SCAN_BUDGET: usize = 200;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    concat!("ai-news-agent/", env!("CARGO_PKG_VERSION")).to_string()
}
fn default_hn_endpoint() -> String {
    "https://hacker-news.firebaseio.com/v0".to_string()
}
fn default_scan_budget() -> usize {
    DEFAULT_SCAN_BUDGET
}
fn default_arxiv_endpoint() -> String {
    "https://export.arxiv.org/api/query".to_string()
}
fn default_arxiv_category() -> String {
    "cs.AI".to_string()
}
fn default_hf_papers_endpoint() -> String {
    "https://huggingface.co/api/daily_papers".to_string()
}
fn default_hf_spaces_endpoint() -> String {
    "https://huggingface.co/api/spaces".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub hacker_news: HackerNewsConfig,
    #[serde(default)]
    pub arxiv: ArxivConfig,
    #[serde(default)]
    pub hf_papers: HfPapersConfig,
    #[serde(default)]
    pub hf_spaces: HfSpacesConfig,
}

/// Settings shared by every upstream client.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Per-request transport timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HackerNewsConfig {
    /// Base URL; `/topstories.json` and `/item/<id>.json` are appended.
    #[serde(default = "default_hn_endpoint")]
    pub endpoint: String,
    /// Maximum number of story ids inspected per call.
    #[serde(default = "default_scan_budget")]
    pub scan_budget: usize,
    /// Replaces the built-in AI/ML keyword list when present.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for HackerNewsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_hn_endpoint(),
            scan_budget: default_scan_budget(),
            keywords: None,
            proxy: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArxivConfig {
    #[serde(default = "default_arxiv_endpoint")]
    pub endpoint: String,
    /// Category every search is restricted to.
    #[serde(default = "default_arxiv_category")]
    pub category: String,
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            endpoint: default_arxiv_endpoint(),
            category: default_arxiv_category(),
            proxy: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HfPapersConfig {
    #[serde(default = "default_hf_papers_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for HfPapersConfig {
    fn default() -> Self {
        Self {
            endpoint: default_hf_papers_endpoint(),
            proxy: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HfSpacesConfig {
    #[serde(default = "default_hf_spaces_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for HfSpacesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_hf_spaces_endpoint(),
            proxy: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate TOML content. Environment proxies are not applied.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(s).context("parsing ai_news toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from an explicit path, then apply environment proxies.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let mut cfg = Self::from_toml_str(&content)
            .with_context(|| format!("loading config from {}", path.display()))?;
        cfg.apply_env_proxies();
        Ok(cfg)
    }

    /// Load using env var + fallbacks (see module docs).
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_p.exists() {
            return Self::load_from(&default_p);
        }
        let mut cfg = Self::default();
        cfg.apply_env_proxies();
        Ok(cfg)
    }

    /// Overlay `BEEAI_*_TOOL_PROXY` variables; blank values are ignored.
    pub fn apply_env_proxies(&mut self) {
        fn env_proxy(key: &str) -> Option<String> {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }
        if let Some(p) = env_proxy(ENV_HN_PROXY) {
            self.hacker_news.proxy = Some(p);
        }
        if let Some(p) = env_proxy(ENV_ARXIV_PROXY) {
            self.arxiv.proxy = Some(p);
        }
        if let Some(p) = env_proxy(ENV_HF_PAPERS_PROXY) {
            self.hf_papers.proxy = Some(p);
        }
        if let Some(p) = env_proxy(ENV_HF_SPACES_PROXY) {
            self.hf_spaces.proxy = Some(p);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            bail!("http.timeout_secs must be > 0");
        }
        if self.hacker_news.scan_budget == 0 {
            bail!("hacker_news.scan_budget must be > 0");
        }
        if let Some(kw) = &self.hacker_news.keywords {
            if kw.iter().all(|k| k.trim().is_empty()) {
                bail!("hacker_news.keywords must contain at least one non-empty keyword");
            }
        }
        if self.arxiv.category.trim().is_empty() {
            bail!("arxiv.category must not be empty");
        }
        for (name, url) in [
            ("hacker_news.endpoint", &self.hacker_news.endpoint),
            ("arxiv.endpoint", &self.arxiv.endpoint),
            ("hf_papers.endpoint", &self.hf_papers.endpoint),
            ("hf_spaces.endpoint", &self.hf_spaces.endpoint),
        ] {
            reqwest::Url::parse(url.trim()).with_context(|| format!("{name} is not a valid URL"))?;
        }
        Ok(())
    }
}
