// src/tools/providers/hacker_news.rs
//! Hacker News: top story ids, then a bounded scan over item details keeping
//! AI/ML-related stories.

use std::sync::Arc;

use async_trait::async_trait;
use metrics::counter;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::tools::{HackerNewsConfig, HttpConfig};
use crate::error::ToolResult;
use crate::tools::http::{build_client, get_json, join_url};
use crate::tools::relevance::{KeywordPredicate, RelevancePredicate};
use crate::tools::scan::RelevantItemFetcher;
use crate::tools::{check_limit, default_limit, limit_schema, parse_args, to_payload, Tool};

pub const NAME: &str = "HackerNews";
const WHAT: &str = "Hacker News stories";
const ITEM_URL_PREFIX: &str = "https://news.ycombinator.com/item?id=";

/// Item detail as returned by `/item/<id>.json`. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HnItem {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub score: Option<i64>,
    pub by: Option<String>,
    /// Unix seconds.
    pub time: Option<i64>,
    pub url: Option<String>,
    pub descendants: Option<i64>,
}

impl HnItem {
    pub fn is_story(&self) -> bool {
        self.kind.as_deref() == Some("story")
    }
}

/// Normalized story record returned to the agent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub score: i64,
    pub author: String,
    pub time: String,
    pub text: Option<String>,
    pub comments_count: i64,
}

impl Story {
    /// Apply defaults: score 0, author "unknown", empty text → None, url → the
    /// HN discussion page, comments 0, time as `%Y-%m-%d %H:%M:%S` (UTC).
    pub fn from_item(id: u64, item: HnItem) -> Self {
        let id = item.id.unwrap_or(id);
        Self {
            id,
            title: item.title.unwrap_or_default(),
            url: item
                .url
                .unwrap_or_else(|| format!("{ITEM_URL_PREFIX}{id}")),
            score: item.score.unwrap_or(0),
            author: item.by.unwrap_or_else(|| "unknown".to_string()),
            time: format_unix(item.time.unwrap_or(0)),
            text: item.text.filter(|t| !t.is_empty()),
            comments_count: item.descendants.unwrap_or(0),
        }
    }
}

fn format_unix(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoriesOutput {
    pub stories: Vec<Story>,
    pub total_fetched: usize,
    pub total_checked: usize,
}

#[derive(Debug, Deserialize)]
struct HackerNewsInput {
    #[serde(default = "default_limit")]
    limit: i64,
}

pub struct HackerNewsTool {
    endpoint: String,
    scan_budget: usize,
    client: reqwest::Client,
    predicate: Arc<dyn RelevancePredicate>,
}

impl HackerNewsTool {
    pub fn new(cfg: &HackerNewsConfig, http: &HttpConfig) -> ToolResult<Self> {
        let predicate: Arc<dyn RelevancePredicate> = match &cfg.keywords {
            Some(kw) => Arc::new(KeywordPredicate::new(kw)),
            None => Arc::new(KeywordPredicate::ai_ml()),
        };
        Ok(Self {
            endpoint: cfg.endpoint.clone(),
            scan_budget: cfg.scan_budget,
            client: build_client(http, cfg.proxy.as_deref())?,
            predicate,
        })
    }

    /// Swap the relevance gate (e.g. for tests or a different topic).
    pub fn with_predicate(mut self, predicate: Arc<dyn RelevancePredicate>) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn scan_budget(&self) -> usize {
        self.scan_budget
    }

    /// Fetch up to `limit` relevant top stories, sorted by score (descending).
    ///
    /// Only the id list request can fail the call; item requests that fail are
    /// skipped.
    pub async fn fetch_ai_stories(&self, limit: usize) -> ToolResult<StoriesOutput> {
        let story_ids = self.fetch_story_ids().await?;

        let outcome = RelevantItemFetcher::new(limit, self.scan_budget)
            .fetch(
                &story_ids,
                |id| async move {
                    self.fetch_item(id)
                        .await
                        .filter(HnItem::is_story)
                        .map(|item| (id, item))
                },
                |(_, item): &(u64, HnItem)| {
                    self.predicate
                        .is_relevant(item.title.as_deref().unwrap_or_default(), item.text.as_deref())
                },
            )
            .await
            .map(|(id, item)| Story::from_item(id, item))
            .sort_desc_by_key(|s| s.score);

        counter!("hn_items_checked_total").increment(outcome.total_checked as u64);
        tracing::info!(
            target: "tools",
            tool = NAME,
            kept = outcome.items.len(),
            checked = outcome.total_checked,
            candidates = story_ids.len(),
            "hacker news scan finished"
        );

        Ok(StoriesOutput {
            total_fetched: outcome.items.len(),
            total_checked: outcome.total_checked,
            stories: outcome.items,
        })
    }

    async fn fetch_story_ids(&self) -> ToolResult<Vec<u64>> {
        let url = join_url(&self.endpoint, "topstories.json");
        get_json(&self.client, &url, WHAT).await.inspect_err(|e| {
            tracing::warn!(error = %e, tool = NAME, "top stories fetch failed");
        })
    }

    /// One item; any failure (transport, status, body, `null`) yields `None`.
    /// `text` is kept as the upstream HTML.
    async fn fetch_item(&self, id: u64) -> Option<HnItem> {
        let url = join_url(&self.endpoint, &format!("item/{id}.json"));
        match get_json::<Option<HnItem>>(&self.client, &url, WHAT).await {
            Ok(Some(item)) => Some(item),
            Ok(None) => {
                tracing::debug!(tool = NAME, id, "item is null, skipping");
                None
            }
            Err(e) => {
                tracing::debug!(tool = NAME, id, error = %e, "item fetch failed, skipping");
                None
            }
        }
    }
}

#[async_trait]
impl Tool for HackerNewsTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Fetches the latest AI and Machine Learning related stories from Hacker News. \
         Returns top trending AI/ML stories with title, URL, score, author, and description."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": limit_schema("Maximum number of AI/ML stories to fetch"),
            },
        })
    }

    async fn execute(&self, args: Value) -> ToolResult<Value> {
        let input: HackerNewsInput = parse_args(args)?;
        let limit = check_limit(input.limit)?;
        to_payload(&self.fetch_ai_stories(limit).await?)
    }
}
