// src/tools/providers/hf_papers.rs
//! Hugging Face daily papers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::tools::{HfPapersConfig, HttpConfig};
use crate::error::ToolResult;
use crate::tools::http::{build_client, get_json};
use crate::tools::{check_limit, default_limit, limit_schema, parse_args, to_payload, Tool};

pub const NAME: &str = "HuggingFacePapers";
const WHAT: &str = "Hugging Face papers";
const PAPER_URL_PREFIX: &str = "https://huggingface.co/papers/";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyPaperItem {
    pub paper: Option<PaperInfo>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(rename = "numComments")]
    pub num_comments: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub ai_summary: Option<String>,
    pub ai_keywords: Option<Vec<String>>,
    pub authors: Option<Vec<PaperAuthor>>,
    pub upvotes: Option<i64>,
    #[serde(rename = "githubRepo")]
    pub github_repo: Option<String>,
    #[serde(rename = "githubStars")]
    pub github_stars: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperAuthor {
    pub name: Option<String>,
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HfPaper {
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub keywords: Vec<String>,
    /// Visible authors only.
    pub authors: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub upvotes: i64,
    #[serde(rename = "numComments")]
    pub num_comments: i64,
    #[serde(rename = "githubRepo")]
    pub github_repo: Option<String>,
    #[serde(rename = "githubStars")]
    pub github_stars: Option<i64>,
    pub url: Option<String>,
}

impl From<DailyPaperItem> for HfPaper {
    fn from(item: DailyPaperItem) -> Self {
        let paper = item.paper.unwrap_or_default();
        let authors = paper
            .authors
            .unwrap_or_default()
            .into_iter()
            .filter(|a| !a.hidden.unwrap_or(false))
            .filter_map(|a| a.name)
            .collect();
        let url = paper
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{PAPER_URL_PREFIX}{id}"));

        Self {
            id: paper.id,
            title: paper.title,
            summary: paper.ai_summary,
            keywords: paper.ai_keywords.unwrap_or_default(),
            authors,
            published_at: item.published_at,
            upvotes: paper.upvotes.unwrap_or(0),
            num_comments: item.num_comments.unwrap_or(0),
            github_repo: paper.github_repo,
            github_stars: paper.github_stars,
            url,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HfPapersOutput {
    pub papers: Vec<HfPaper>,
    pub total_fetched: usize,
}

#[derive(Debug, Deserialize)]
struct HfPapersInput {
    #[serde(default = "default_limit")]
    limit: i64,
}

pub struct HuggingFacePapersTool {
    endpoint: String,
    client: reqwest::Client,
}

impl HuggingFacePapersTool {
    pub fn new(cfg: &HfPapersConfig, http: &HttpConfig) -> ToolResult<Self> {
        Ok(Self {
            endpoint: cfg.endpoint.trim().to_string(),
            client: build_client(http, cfg.proxy.as_deref())?,
        })
    }

    /// Today's papers in upstream order, first `limit` only.
    pub async fn fetch_papers(&self, limit: usize) -> ToolResult<HfPapersOutput> {
        let mut items: Vec<DailyPaperItem> = get_json(&self.client, &self.endpoint, WHAT).await?;
        items.truncate(limit);
        let papers: Vec<HfPaper> = items.into_iter().map(HfPaper::from).collect();

        tracing::info!(target: "tools", tool = NAME, fetched = papers.len(), "hf papers fetch finished");

        Ok(HfPapersOutput {
            total_fetched: papers.len(),
            papers,
        })
    }
}

#[async_trait]
impl Tool for HuggingFacePapersTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Fetch daily trending papers from Hugging Face Hub. \
         Returns recent AI/ML research papers with titles, summaries, \
         authors, GitHub links, and community engagement metrics."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": limit_schema("Maximum number of papers to fetch"),
            },
        })
    }

    async fn execute(&self, args: Value) -> ToolResult<Value> {
        let input: HfPapersInput = parse_args(args)?;
        let limit = check_limit(input.limit)?;
        to_payload(&self.fetch_papers(limit).await?)
    }
}
