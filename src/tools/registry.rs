// src/tools/registry.rs
//! Tool registry used by the HTTP surface (and the demo binary) to list and
//! execute tools by name.

use std::collections::HashMap;
use std::sync::Arc;

use metrics::{counter, histogram};
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{ToolError, ToolResult};
use crate::tools::providers::{
    ArxivTool, HackerNewsTool, HuggingFacePapersTool, HuggingFaceSpacesTool,
};
use crate::tools::{Tool, ToolDefinition};

pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// The four research-news tools, configured from `cfg`.
    pub fn from_config(cfg: &AppConfig) -> ToolResult<Self> {
        let mut reg = Self::new();
        reg.register(HackerNewsTool::new(&cfg.hacker_news, &cfg.http)?);
        reg.register(ArxivTool::new(&cfg.arxiv, &cfg.http)?);
        reg.register(HuggingFacePapersTool::new(&cfg.hf_papers, &cfg.http)?);
        reg.register(HuggingFaceSpacesTool::new(&cfg.hf_spaces, &cfg.http)?);
        Ok(reg)
    }

    /// Register a tool; a later registration under the same name replaces it.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.register_arc(Arc::new(tool));
    }

    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        debug!("Registering tool: {name}");
        self.tools.insert(name, tool);
    }

    /// Definitions sorted by name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters_schema(),
            })
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool call, recording call/error counters and latency.
    pub async fn execute(&self, name: &str, args: Value) -> ToolResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let label = tool.name();

        debug!("Executing tool: {label}");
        counter!("tool_calls_total", "tool" => label).increment(1);
        let t0 = std::time::Instant::now();

        let res = tool.execute(args).await;

        histogram!("tool_fetch_ms", "tool" => label).record(t0.elapsed().as_secs_f64() * 1_000.0);
        if let Err(e) = &res {
            counter!("tool_errors_total", "tool" => label, "kind" => e.kind()).increment(1);
            tracing::warn!(tool = label, error = %e, "tool call failed");
        }
        res
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
