// tests/common/mod.rs
// Local upstream stand-ins: an axum server on 127.0.0.1:0 per test.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{extract::Path, http::StatusCode, routing::get, Router};
use serde_json::Value;

pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Canned Hacker News API under `/v0`. Item requests are recorded in order.
#[derive(Clone, Default)]
pub struct HnFixture {
    pub list: Option<(StatusCode, String)>,
    pub items: HashMap<u64, (StatusCode, String)>,
    pub item_hits: Arc<Mutex<Vec<u64>>>,
    pub list_hits: Arc<Mutex<usize>>,
}

impl HnFixture {
    pub fn with_ids(ids: &[u64]) -> Self {
        Self {
            list: Some((StatusCode::OK, serde_json::to_string(ids).unwrap())),
            ..Default::default()
        }
    }

    pub fn list_response(mut self, status: StatusCode, body: &str) -> Self {
        self.list = Some((status, body.to_string()));
        self
    }

    pub fn item(mut self, id: u64, body: Value) -> Self {
        self.items.insert(id, (StatusCode::OK, body.to_string()));
        self
    }

    pub fn story(self, id: u64, title: &str, score: i64) -> Self {
        self.item(
            id,
            serde_json::json!({
                "id": id, "type": "story", "title": title, "score": score,
                "by": "tester", "time": 1_700_000_000, "descendants": 1
            }),
        )
    }

    pub fn raw_item(mut self, id: u64, status: StatusCode, body: &str) -> Self {
        self.items.insert(id, (status, body.to_string()));
        self
    }

    pub fn item_hits(&self) -> Vec<u64> {
        self.item_hits.lock().unwrap().clone()
    }

    pub fn list_hits(&self) -> usize {
        *self.list_hits.lock().unwrap()
    }

    pub fn router(&self) -> Router {
        let list = self.list.clone();
        let list_hits = self.list_hits.clone();
        let items = Arc::new(self.items.clone());
        let item_hits = self.item_hits.clone();

        Router::new()
            .route(
                "/v0/topstories.json",
                get(move || {
                    let list = list.clone();
                    let list_hits = list_hits.clone();
                    async move {
                        *list_hits.lock().unwrap() += 1;
                        list.unwrap_or((StatusCode::OK, "[]".to_string()))
                    }
                }),
            )
            .route(
                "/v0/item/{file}",
                get(move |Path(file): Path<String>| {
                    let items = items.clone();
                    let item_hits = item_hits.clone();
                    async move {
                        let id: u64 = file.trim_end_matches(".json").parse().unwrap_or(0);
                        item_hits.lock().unwrap().push(id);
                        items
                            .get(&id)
                            .cloned()
                            .unwrap_or((StatusCode::OK, "null".to_string()))
                    }
                }),
            )
    }

    /// Serve and return the base endpoint (`http://addr/v0`).
    pub async fn start(&self) -> String {
        let addr = serve(self.router()).await;
        format!("http://{addr}/v0")
    }
}

/// Serve one fixed body at `path`, recording query strings.
pub async fn serve_fixed(
    path: &'static str,
    status: StatusCode,
    body: String,
) -> (String, Arc<Mutex<Vec<String>>>) {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let q2 = queries.clone();
    let app = Router::new().route(
        path,
        get(move |uri: axum::http::Uri| {
            let body = body.clone();
            let q2 = q2.clone();
            async move {
                q2.lock()
                    .unwrap()
                    .push(uri.query().unwrap_or_default().to_string());
                (status, body)
            }
        }),
    );
    let addr = serve(app).await;
    (format!("http://{addr}{path}"), queries)
}
