// tests/hacker_news_tool.rs
//
// Hacker News tool against a local fixture API. Covered:
// - early stop right after the limit-th match (no further item requests)
// - scan budget caps item requests when matches are scarce
// - per-item failures (HTTP 500, null, non-story, bad JSON) are skipped
// - list failure → UpstreamUnavailable / MalformedResponse, no item requests
// - injected predicate, configured keywords, raw HTML text matched and returned

mod common;

use std::sync::Arc;

use ai_news_agent::config::tools::{HackerNewsConfig, HttpConfig};
use ai_news_agent::tools::providers::HackerNewsTool;
use ai_news_agent::tools::relevance::RelevancePredicate;
use ai_news_agent::tools::Tool;
use ai_news_agent::ToolError;
use axum::http::StatusCode;
use common::HnFixture;
use serde_json::json;

fn tool(endpoint: String, scan_budget: usize) -> HackerNewsTool {
    let cfg = HackerNewsConfig {
        endpoint,
        scan_budget,
        ..Default::default()
    };
    let http = HttpConfig {
        timeout_secs: 5,
        ..Default::default()
    };
    HackerNewsTool::new(&cfg, &http).expect("build hn tool")
}

#[tokio::test]
async fn stops_after_limit_matches_and_sorts_by_score() {
    let fx = HnFixture::with_ids(&[1, 2, 3, 4, 5])
        .story(1, "Postgres tuning notes", 5)
        .story(2, "A new LLM benchmark", 10)
        .story(3, "Go 1.23 released", 1)
        .story(4, "PyTorch 3.0", 30)
        .story(5, "OpenAI ships something", 20);
    let hn = tool(fx.start().await, 5);

    let out = hn.fetch_ai_stories(2).await.expect("fetch ok");

    let ids: Vec<u64> = out.stories.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![4, 2]);
    assert_eq!(out.total_fetched, 2);
    assert_eq!(out.total_checked, 4);
    assert_eq!(fx.item_hits(), vec![1, 2, 3, 4], "item 5 must not be requested");
    assert_eq!(fx.list_hits(), 1);
}

#[tokio::test]
async fn scan_budget_caps_requests_when_matches_are_scarce() {
    let fx = HnFixture::with_ids(&[1, 2, 3, 4, 5, 6])
        .story(1, "Diffusion models explained", 3)
        .story(2, "Cooking pasta", 4)
        .story(3, "Bicycle gears", 2)
        .story(4, "GPT-5 rumors", 50);
    let hn = tool(fx.start().await, 3);

    let out = hn.fetch_ai_stories(10).await.expect("fetch ok");

    assert_eq!(out.stories.len(), 1);
    assert_eq!(out.stories[0].id, 1);
    assert_eq!(out.total_checked, 3);
    assert_eq!(fx.item_hits(), vec![1, 2, 3]);
}

#[tokio::test]
async fn item_failures_are_skipped_not_fatal() {
    let fx = HnFixture::with_ids(&[10, 11, 12, 13, 14])
        .raw_item(10, StatusCode::INTERNAL_SERVER_ERROR, "boom")
        // 11 is not registered: the fixture answers `null`.
        .item(12, json!({ "id": 12, "type": "job", "title": "Hiring ML engineers" }))
        .raw_item(13, StatusCode::OK, "{not json")
        .story(14, "Transformer tricks", 3);
    let hn = tool(fx.start().await, 200);

    let out = hn.fetch_ai_stories(5).await.expect("fetch ok");

    let ids: Vec<u64> = out.stories.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![14]);
    assert_eq!(out.total_checked, 5);
    assert_eq!(fx.item_hits(), vec![10, 11, 12, 13, 14]);
}

#[tokio::test]
async fn list_http_500_is_upstream_unavailable_without_item_requests() {
    let fx = HnFixture::default()
        .list_response(StatusCode::INTERNAL_SERVER_ERROR, "oops")
        .story(1, "LLM", 1);
    let hn = tool(fx.start().await, 200);

    let err = hn.fetch_ai_stories(3).await.unwrap_err();
    assert!(
        matches!(err, ToolError::UpstreamUnavailable { .. }),
        "unexpected error: {err:?}"
    );
    assert!(err.to_string().contains("500"), "message: {err}");
    assert!(fx.item_hits().is_empty());
}

#[tokio::test]
async fn list_with_garbage_body_is_malformed() {
    let fx = HnFixture::default().list_response(StatusCode::OK, "<html>nope</html>");
    let hn = tool(fx.start().await, 200);

    let err = hn.fetch_ai_stories(3).await.unwrap_err();
    assert!(matches!(err, ToolError::MalformedResponse { .. }), "{err:?}");
}

#[tokio::test]
async fn unreachable_upstream_is_upstream_unavailable() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let hn = tool(format!("http://127.0.0.1:{port}/v0"), 200);

    let err = hn.fetch_ai_stories(3).await.unwrap_err();
    assert!(matches!(err, ToolError::UpstreamUnavailable { .. }), "{err:?}");
}

#[tokio::test]
async fn injected_predicate_replaces_keyword_gate() {
    let fx = HnFixture::with_ids(&[1, 2, 3])
        .story(1, "Rust 2024 edition", 8)
        .story(2, "LLM of the week", 99)
        .story(3, "Rust async traits", 9);
    let only_rust: Arc<dyn RelevancePredicate> =
        Arc::new(|title: &str, _text: Option<&str>| title.contains("Rust"));
    let hn = tool(fx.start().await, 200).with_predicate(only_rust);

    let out = hn.fetch_ai_stories(10).await.expect("fetch ok");
    let ids: Vec<u64> = out.stories.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[tokio::test]
async fn configured_keywords_drive_the_default_gate() {
    let fx = HnFixture::with_ids(&[1, 2])
        .story(1, "WebAssembly everywhere", 1)
        .story(2, "LLM of the week", 2);
    let cfg = HackerNewsConfig {
        endpoint: fx.start().await,
        keywords: Some(vec!["webassembly".into()]),
        ..Default::default()
    };
    let hn = HackerNewsTool::new(&cfg, &HttpConfig::default()).unwrap();

    let out = hn.fetch_ai_stories(10).await.unwrap();
    assert_eq!(out.stories.len(), 1);
    assert_eq!(out.stories[0].id, 1);
}

#[tokio::test]
async fn keywords_in_link_markup_count_and_text_is_returned_verbatim() {
    let html = r#"Check <a href="https://openai.com/blog" rel="nofollow">this post</a>"#;
    let fx = HnFixture::with_ids(&[7, 8])
        .item(
            7,
            json!({ "id": 7, "type": "story", "title": "Ask HN: weekend reading?", "text": html, "score": 4 }),
        )
        .item(
            8,
            json!({ "id": 8, "type": "story", "title": "Ask HN: weekend reading?", "text": "<p>Check this post</p>", "score": 9 }),
        );
    let hn = tool(fx.start().await, 200);

    let out = hn.fetch_ai_stories(5).await.unwrap();
    assert_eq!(out.stories.len(), 1);
    let s = &out.stories[0];
    assert_eq!(s.id, 7);
    assert_eq!(s.text.as_deref(), Some(html));
    assert_eq!(s.url, "https://news.ycombinator.com/item?id=7");
    assert_eq!(s.author, "unknown");
    assert_eq!(out.total_checked, 2);
}

#[tokio::test]
async fn execute_returns_wire_shape_and_validates_limit() {
    let fx = HnFixture::with_ids(&[1]).story(1, "Claude for code review", 12);
    let hn = tool(fx.start().await, 200);

    let v = hn.execute(json!({})).await.expect("default limit");
    assert_eq!(v["total_fetched"], 1);
    assert_eq!(v["total_checked"], 1);
    let story = &v["stories"][0];
    for key in ["id", "title", "url", "score", "author", "time", "text", "comments_count"] {
        assert!(story.get(key).is_some(), "missing {key}");
    }
    assert_eq!(story["time"], "2023-11-14 22:13:20");

    let err = hn.execute(json!({ "limit": 0 })).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput(_)));
    let err = hn.execute(json!({ "limit": 101 })).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput(_)));
    assert_eq!(fx.list_hits(), 1, "invalid input must not reach upstream");
}
