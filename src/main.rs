//! Research-news agent service: binary entrypoint.
//! Boots the Axum HTTP server exposing the tool registry and the chat endpoints.

use ai_news_agent::api::{self, AppState};
use ai_news_agent::metrics::Metrics;
use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // BEEAI_*_TOOL_PROXY / AI_NEWS_CONFIG_PATH may come from .env.
    let _ = dotenvy::dotenv();

    ai_news_agent::init_tracing();

    let registry = ai_news_agent::build_registry()?;
    tracing::info!(tools = ?registry.tool_names(), "tool registry ready");

    let mut router = api::router(AppState::new(registry));
    match Metrics::init() {
        Ok(m) => router = router.merge(m.router()),
        Err(e) => tracing::warn!(error = %e, "metrics disabled"),
    }

    Ok(router.into())
}
