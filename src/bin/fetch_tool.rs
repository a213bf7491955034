//! Run one tool from the command line and print its JSON result.
//!
//! Usage: `fetch_tool <ToolName> [json-args]`, e.g.
//! `fetch_tool HackerNews '{"limit": 5}'`.

use anyhow::{bail, Context};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    ai_news_agent::init_tracing();

    let mut args = std::env::args().skip(1);
    let registry = ai_news_agent::build_registry()?;

    let Some(name) = args.next() else {
        bail!("usage: fetch_tool <{}> [json-args]", registry.tool_names().join("|"));
    };
    let tool_args = match args.next() {
        Some(raw) => serde_json::from_str(&raw).context("parsing json-args")?,
        None => serde_json::Value::Null,
    };

    let out = registry.execute(&name, tool_args).await?;
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
