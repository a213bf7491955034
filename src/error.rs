// src/error.rs
use thiserror::Error;

/// Failure of a single tool invocation.
///
/// `what` names the upstream resource in plain words ("Hacker News stories",
/// "arXiv papers", ...) so the rendered message reads well in a chat transcript.
#[derive(Debug, Error)]
pub enum ToolError {
    /// HTTP status >= 400, connection failure or timeout.
    #[error("Upstream unavailable while fetching {what}: {detail}")]
    UpstreamUnavailable { what: &'static str, detail: String },

    /// Upstream answered but the body could not be parsed.
    #[error("Malformed response while fetching {what}: {detail}")]
    MalformedResponse { what: &'static str, detail: String },

    /// Arguments rejected before any request is issued.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No tool registered under that name.
    #[error("Tool '{0}' not found")]
    UnknownTool(String),

    /// HTTP client could not be built (e.g. unparsable proxy URL).
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl ToolError {
    pub(crate) fn upstream(what: &'static str, detail: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            what,
            detail: detail.into(),
        }
    }

    pub(crate) fn malformed(what: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            what,
            detail: detail.into(),
        }
    }

    /// Short stable label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::UpstreamUnavailable { .. } => "upstream_unavailable",
            ToolError::MalformedResponse { .. } => "malformed_response",
            ToolError::InvalidInput(_) => "invalid_input",
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::Client(_) => "client",
        }
    }
}

pub type ToolResult<T> = std::result::Result<T, ToolError>;
