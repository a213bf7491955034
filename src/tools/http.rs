// src/tools/http.rs
//! Client construction and the status/body checks every upstream call goes
//! through. Failures map onto `ToolError::UpstreamUnavailable` (transport or
//! status >= 400) and `ToolError::MalformedResponse` (body not parsable).

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::tools::HttpConfig;
use crate::error::{ToolError, ToolResult};

/// Build a client with the shared timeout/user agent and an optional proxy
/// applied to every scheme.
pub fn build_client(http: &HttpConfig, proxy: Option<&str>) -> ToolResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .user_agent(http.user_agent.as_str())
        .timeout(Duration::from_secs(http.timeout_secs));

    if let Some(p) = proxy.map(str::trim).filter(|p| !p.is_empty()) {
        let proxy = reqwest::Proxy::all(p)
            .map_err(|e| ToolError::Client(format!("invalid proxy '{p}': {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ToolError::Client(e.to_string()))
}

fn describe_transport(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        format!("network error: {e}")
    }
}

/// Send the request and reject HTTP status >= 400.
pub(crate) async fn send_checked(
    req: reqwest::RequestBuilder,
    what: &'static str,
) -> ToolResult<reqwest::Response> {
    let resp = req
        .send()
        .await
        .map_err(|e| ToolError::upstream(what, describe_transport(&e)))?;

    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(ToolError::upstream(what, format!("HTTP {status}")));
    }
    Ok(resp)
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    what: &'static str,
) -> ToolResult<T> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ToolError::upstream(what, describe_transport(&e)))?;
    serde_json::from_slice(&bytes).map_err(|e| ToolError::malformed(what, e.to_string()))
}

pub(crate) async fn read_text(resp: reqwest::Response, what: &'static str) -> ToolResult<String> {
    resp.text()
        .await
        .map_err(|e| ToolError::upstream(what, describe_transport(&e)))
}

/// `GET` + status check + JSON decode in one step.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    what: &'static str,
) -> ToolResult<T> {
    let req = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json");
    let resp = send_checked(req, what).await?;
    read_json(resp, what).await
}

/// Join a base URL and a path segment without doubling slashes.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
