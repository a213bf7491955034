// src/tools/providers/arxiv.rs
//! arXiv Atom API: recent papers in one category, optionally narrowed by a
//! free-text query.

use async_trait::async_trait;
use quick_xml::de::from_str;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::tools::{ArxivConfig, HttpConfig};
use crate::error::{ToolError, ToolResult};
use crate::tools::http::{build_client, read_text, send_checked};
use crate::tools::{check_limit, default_limit, limit_schema, parse_args, to_payload, Tool};

pub const NAME: &str = "Arxiv";
const WHAT: &str = "arXiv papers";

// --- Atom feed (only the parts we read) ---

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    published: Option<String>,
    updated: Option<String>,
    #[serde(rename = "author", default)]
    authors: Vec<Author>,
    #[serde(rename = "link", default)]
    links: Vec<Link>,
    #[serde(rename = "primary_category", alias = "arxiv:primary_category", default)]
    primary_category: Option<Term>,
    #[serde(rename = "category", default)]
    categories: Vec<Term>,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Link {
    #[serde(rename = "@href")]
    href: Option<String>,
    #[serde(rename = "@rel")]
    rel: Option<String>,
    #[serde(rename = "@title")]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Term {
    #[serde(rename = "@term")]
    term: Option<String>,
}

// --- Output ---

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArxivPaper {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub authors: Vec<String>,
    /// `YYYY-MM-DD`, or "" when absent.
    pub published: String,
    pub updated: String,
    pub pdf_link: Option<String>,
    pub abstract_link: Option<String>,
    /// Primary category first, then the rest in feed order, no duplicates.
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArxivOutput {
    pub papers: Vec<ArxivPaper>,
    pub total_fetched: usize,
    pub query: String,
}

#[derive(Debug, Deserialize)]
struct ArxivInput {
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    query: Option<String>,
}

/// RFC 3339 → `YYYY-MM-DD` in the timestamp's own offset; unparsable input
/// falls back to its first 10 characters.
fn format_day(raw: Option<&str>) -> String {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    match chrono::DateTime::parse_from_rfc3339(s) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => s.chars().take(10).collect(),
    }
}

/// Outer whitespace only; line breaks inside titles and abstracts are kept.
fn text_of(v: Option<String>) -> String {
    v.as_deref().map(str::trim).map(str::to_string).unwrap_or_default()
}

impl From<Entry> for ArxivPaper {
    fn from(e: Entry) -> Self {
        let authors = e
            .authors
            .into_iter()
            .filter_map(|a| a.name)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        let mut pdf_link = None;
        let mut abstract_link = None;
        for link in e.links {
            if link.title.as_deref() == Some("pdf") {
                pdf_link = link.href;
            } else if link.rel.as_deref() == Some("alternate") {
                abstract_link = link.href;
            }
        }

        let mut categories: Vec<String> = Vec::new();
        if let Some(primary) = e.primary_category {
            categories.push(primary.term.unwrap_or_default());
        }
        for term in e.categories.into_iter().filter_map(|c| c.term) {
            if !term.is_empty() && !categories.contains(&term) {
                categories.push(term);
            }
        }

        Self {
            id: e.id.map(|s| s.trim().to_string()).unwrap_or_default(),
            title: text_of(e.title),
            summary: text_of(e.summary),
            authors,
            published: format_day(e.published.as_deref()),
            updated: format_day(e.updated.as_deref()),
            pdf_link,
            abstract_link,
            categories,
        }
    }
}

/// Parse an Atom response body into papers, in feed order.
pub fn parse_feed(body: &str) -> ToolResult<Vec<ArxivPaper>> {
    let feed: Feed = from_str(body).map_err(|e| ToolError::malformed(WHAT, e.to_string()))?;
    Ok(feed.entries.into_iter().map(ArxivPaper::from).collect())
}

/// `cat:<category>` alone, or `cat:<category> AND (<query>)`.
pub fn build_search_query(category: &str, query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("cat:{category} AND ({q})"),
        None => format!("cat:{category}"),
    }
}

pub struct ArxivTool {
    endpoint: String,
    category: String,
    client: reqwest::Client,
}

impl ArxivTool {
    pub fn new(cfg: &ArxivConfig, http: &HttpConfig) -> ToolResult<Self> {
        Ok(Self {
            endpoint: cfg.endpoint.trim().to_string(),
            category: cfg.category.trim().to_string(),
            client: build_client(http, cfg.proxy.as_deref())?,
        })
    }

    /// Newest-first papers; at most `limit`, as requested from the API.
    pub async fn fetch_papers(&self, limit: usize, query: Option<&str>) -> ToolResult<ArxivOutput> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let search_query = build_search_query(&self.category, query);
        let params = [
            ("search_query", search_query),
            ("start", "0".to_string()),
            ("max_results", limit.to_string()),
            ("sortBy", "submittedDate".to_string()),
            ("sortOrder", "descending".to_string()),
        ];

        let req = self.client.get(&self.endpoint).query(&params);
        let body = read_text(send_checked(req, WHAT).await?, WHAT).await?;
        let mut papers = parse_feed(&body)?;
        papers.truncate(limit);

        tracing::info!(target: "tools", tool = NAME, fetched = papers.len(), "arxiv fetch finished");

        Ok(ArxivOutput {
            total_fetched: papers.len(),
            papers,
            query: query
                .map(str::to_string)
                .unwrap_or_else(|| format!("recent {} papers", self.category)),
        })
    }
}

#[async_trait]
impl Tool for ArxivTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Fetches AI research papers from arXiv. Can search by keywords or fetch \
         recent papers from the cs.AI (Artificial Intelligence) category. \
         Returns title, authors, abstract, publication date, and links to papers."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": limit_schema("Maximum number of papers to fetch"),
                "query": {
                    "type": ["string", "null"],
                    "description": "Optional search query. If not provided, fetches recent cs.AI papers",
                    "default": null,
                },
            },
        })
    }

    async fn execute(&self, args: Value) -> ToolResult<Value> {
        let input: ArxivInput = parse_args(args)?;
        let limit = check_limit(input.limit)?;
        to_payload(&self.fetch_papers(limit, input.query.as_deref()).await?)
    }
}
