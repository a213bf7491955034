// src/tools/providers/hf_spaces.rs
//! Hugging Face Spaces, ranked by trending score.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};

use crate::config::tools::{HfSpacesConfig, HttpConfig};
use crate::error::ToolResult;
use crate::tools::http::{build_client, get_json};
use crate::tools::{check_limit, default_limit, limit_schema, parse_args, to_payload, Tool};

pub const NAME: &str = "HuggingFaceSpaces";
const WHAT: &str = "Hugging Face spaces";
const SPACE_URL_PREFIX: &str = "https://huggingface.co/spaces/";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpaceInfo {
    pub id: Option<String>,
    pub sdk: Option<String>,
    pub likes: Option<i64>,
    /// Integer or float upstream; passed through as-is.
    #[serde(rename = "trendingScore")]
    pub trending_score: Option<Number>,
    pub tags: Option<Vec<String>>,
    pub private: Option<bool>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl SpaceInfo {
    fn trending_key(&self) -> f64 {
        self.trending_score
            .as_ref()
            .and_then(Number::as_f64)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HfSpace {
    pub id: Option<String>,
    pub sdk: Option<String>,
    pub likes: i64,
    #[serde(rename = "trendingScore")]
    pub trending_score: Number,
    pub tags: Vec<String>,
    pub private: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub url: Option<String>,
}

impl From<SpaceInfo> for HfSpace {
    fn from(s: SpaceInfo) -> Self {
        let url = s
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{SPACE_URL_PREFIX}{id}"));
        Self {
            id: s.id,
            sdk: s.sdk,
            likes: s.likes.unwrap_or(0),
            trending_score: s.trending_score.unwrap_or_else(|| Number::from(0)),
            tags: s.tags.unwrap_or_default(),
            private: s.private.unwrap_or(false),
            created_at: s.created_at,
            url,
        }
    }
}

/// Stable sort by trending score, highest first; then keep `limit`.
pub fn rank_spaces(mut spaces: Vec<SpaceInfo>, limit: usize) -> Vec<HfSpace> {
    spaces.sort_by(|a, b| b.trending_key().total_cmp(&a.trending_key()));
    spaces.truncate(limit);
    spaces.into_iter().map(HfSpace::from).collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HfSpacesOutput {
    pub spaces: Vec<HfSpace>,
    pub total_fetched: usize,
}

#[derive(Debug, Deserialize)]
struct HfSpacesInput {
    #[serde(default = "default_limit")]
    limit: i64,
}

pub struct HuggingFaceSpacesTool {
    endpoint: String,
    client: reqwest::Client,
}

impl HuggingFaceSpacesTool {
    pub fn new(cfg: &HfSpacesConfig, http: &HttpConfig) -> ToolResult<Self> {
        Ok(Self {
            endpoint: cfg.endpoint.trim().to_string(),
            client: build_client(http, cfg.proxy.as_deref())?,
        })
    }

    pub async fn fetch_spaces(&self, limit: usize) -> ToolResult<HfSpacesOutput> {
        let raw: Vec<SpaceInfo> = get_json(&self.client, &self.endpoint, WHAT).await?;
        let listed = raw.len();
        let spaces = rank_spaces(raw, limit);

        tracing::info!(
            target: "tools",
            tool = NAME,
            listed,
            fetched = spaces.len(),
            "hf spaces fetch finished"
        );

        Ok(HfSpacesOutput {
            total_fetched: spaces.len(),
            spaces,
        })
    }
}

#[async_trait]
impl Tool for HuggingFaceSpacesTool {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Fetch trending spaces from Hugging Face Hub. Returns popular AI/ML demo \
         applications and interactive tools sorted by trending score, including \
         SDK type, likes, and tags."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "limit": limit_schema("Maximum number of trending spaces to fetch"),
            },
        })
    }

    async fn execute(&self, args: Value) -> ToolResult<Value> {
        let input: HfSpacesInput = parse_args(args)?;
        let limit = check_limit(input.limit)?;
        to_payload(&self.fetch_spaces(limit).await?)
    }
}
