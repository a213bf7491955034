use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub struct Metrics {
    pub handle: PrometheusHandle,
}

/// Register descriptions so series show up on /metrics with help text.
pub fn describe_tool_metrics() {
    describe_counter!("tool_calls_total", "Tool invocations, by tool.");
    describe_counter!("tool_errors_total", "Failed tool invocations, by tool and kind.");
    describe_counter!(
        "hn_items_checked_total",
        "Hacker News item details fetched by the relevance scan."
    );
    describe_histogram!("tool_fetch_ms", "Tool call latency in milliseconds.");
}

impl Metrics {
    /// Install the global Prometheus recorder. Fails if one is already installed.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?;
        describe_tool_metrics();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
