// src/tools/mod.rs
//! Tool runtime: the `Tool` trait every research-news fetcher implements, the
//! registry the HTTP surface dispatches through, and shared argument helpers.

pub mod http;
pub mod providers;
pub mod registry;
pub mod relevance;
pub mod scan;

pub use registry::ToolRegistry;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::error::{ToolError, ToolResult};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

/// Trait that all tools must implement.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name exposed to the agent.
    fn name(&self) -> &'static str;
    /// Human-readable description for tool selection.
    fn description(&self) -> &'static str;
    /// JSON schema for accepted tool arguments.
    fn parameters_schema(&self) -> Value;
    /// Run the tool with JSON arguments and return its JSON payload.
    async fn execute(&self, args: Value) -> ToolResult<Value>;
}

/// What the agent sees when choosing a tool.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Decode tool arguments; `null` is treated as an empty object so every field
/// falls back to its default.
pub fn parse_args<T: DeserializeOwned>(args: Value) -> ToolResult<T> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| ToolError::InvalidInput(e.to_string()))
}

pub(crate) fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Validate a requested item count (1..=100).
pub fn check_limit(limit: i64) -> ToolResult<usize> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(ToolError::InvalidInput(format!(
            "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
        )));
    }
    Ok(limit as usize)
}

/// Schema fragment for the shared `limit` argument.
pub(crate) fn limit_schema(description: &str) -> Value {
    json!({
        "type": "integer",
        "description": description,
        "default": DEFAULT_LIMIT,
        "minimum": MIN_LIMIT,
        "maximum": MAX_LIMIT,
    })
}

pub(crate) fn to_payload<T: Serialize>(out: &T) -> ToolResult<Value> {
    serde_json::to_value(out).map_err(|e| ToolError::Client(format!("serializing output: {e}")))
}
