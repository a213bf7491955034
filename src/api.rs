use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::chat::{self, ChatReply, ChatRequest, Starter};
use crate::error::ToolError;
use crate::tools::{ToolDefinition, ToolRegistry};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/tools", get(list_tools))
        .route("/tools/{name}", post(call_tool))
        .route("/starters", get(list_starters))
        .route("/chat", post(chat_message))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Tool failure rendered as `{ "error": "..." }` with a status per error kind.
pub struct ApiError(pub ToolError);

impl From<ToolError> for ApiError {
    fn from(e: ToolError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ToolError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ToolError::UnknownTool(_) => StatusCode::NOT_FOUND,
            ToolError::UpstreamUnavailable { .. } | ToolError::MalformedResponse { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ToolError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({ "error": self.0.to_string(), "kind": self.0.kind() });
        (status, Json(body)).into_response()
    }
}

async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.registry.definitions())
}

/// Empty body means "all defaults".
async fn call_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let args = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ToolError::InvalidInput(format!("request body is not JSON: {e}")))?
    };
    let out = state.registry.execute(&name, args).await?;
    Ok(Json(out))
}

/// The chat UI asks for starters when it opens a new conversation.
async fn list_starters() -> Json<Vec<Starter>> {
    tracing::info!("Chat started");
    Json(chat::starters())
}

async fn chat_message(Json(req): Json<ChatRequest>) -> Json<ChatReply> {
    tracing::debug!(len = req.message.len(), "chat message");
    Json(chat::reply(&req.message))
}
