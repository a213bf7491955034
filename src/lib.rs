// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod metrics;
pub mod tools;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::config::AppConfig;
pub use crate::error::{ToolError, ToolResult};
pub use crate::tools::{Tool, ToolRegistry};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact fmt logging filtered by `RUST_LOG` (default `ai_news_agent=info,warn`).
/// Safe to call when a subscriber is already installed; it is then a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ai_news_agent=info,tools=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// Load configuration (see `config::tools`) and build the registry with all tools.
pub fn build_registry() -> anyhow::Result<ToolRegistry> {
    let cfg = AppConfig::load_default()?;
    tracing::info!(
        hn_scan_budget = cfg.hacker_news.scan_budget,
        timeout_secs = cfg.http.timeout_secs,
        hn_proxy = cfg.hacker_news.proxy.is_some(),
        arxiv_proxy = cfg.arxiv.proxy.is_some(),
        "tool config loaded"
    );
    Ok(ToolRegistry::from_config(&cfg)?)
}
