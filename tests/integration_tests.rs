//! Integration tests using mock HTTP server
//!
//! Tests the full flow: HTTP response with a link header → parsed links →
//! pagination controller → navigation dispatch → next page fetch.

use pagelink::http::{PageClient, PageClientConfig};
use pagelink::pagination::PaginationController;
use pagelink::types::{Direction, Query, QueryValue};
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn link_header(uri: &str, prev: (&str, bool), next: (&str, bool)) -> String {
    format!(
        "<{uri}/api/items/?cursor={}>; rel=\"previous\"; results=\"{}\"; cursor=\"{}\", \
         <{uri}/api/items/?cursor={}>; rel=\"next\"; results=\"{}\"; cursor=\"{}\"",
        prev.0, prev.1, prev.0, next.0, next.1, next.0,
    )
}

// ============================================================================
// Page Fetching
// ============================================================================

#[tokio::test]
async fn test_fetch_page_parses_link_header() {
    let mock_server = MockServer::start().await;
    let header = link_header(&mock_server.uri(), ("0:0:1", false), ("0:100:0", true));

    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}, {"id": 2}]))
                .insert_header("link", header.as_str()),
        )
        .mount(&mock_server)
        .await;

    let client = PageClient::new().unwrap();
    let page = client
        .fetch_page(&format!("{}/api/items/", mock_server.uri()), &Query::new())
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.body.as_ref().unwrap().as_array().unwrap().len(), 2);
    assert_eq!(page.page_links.as_deref(), Some(header.as_str()));
    assert!(!page.has_previous());
    assert!(page.has_next());
    assert_eq!(page.links.next.cursor, "0:100:0");
}

#[tokio::test]
async fn test_fetch_page_without_link_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = PageClient::new().unwrap();
    let page = client
        .fetch_page(&format!("{}/api/items/", mock_server.uri()), &Query::new())
        .await
        .unwrap();

    assert!(page.page_links.is_none());
    assert!(!page.has_next());
    assert!(!page.has_previous());
}

#[tokio::test]
async fn test_fetch_page_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .and(query_param("cursor", "0:100:0"))
        .and(query_param("statsPeriod", "14d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let mut query = Query::new();
    query.insert("cursor".to_string(), QueryValue::from("0:100:0"));
    query.insert("statsPeriod".to_string(), QueryValue::from("14d"));

    let client = PageClient::new().unwrap();
    let page = client
        .fetch_page(&format!("{}/api/items/", mock_server.uri()), &query)
        .await
        .unwrap();
    assert_eq!(page.status, 200);
}

#[tokio::test]
async fn test_fetch_page_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let client = PageClient::new().unwrap();
    let err = client
        .fetch_page(&format!("{}/api/items/", mock_server.uri()), &Query::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP 503: unavailable");
}

#[tokio::test]
async fn test_fetch_page_with_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let config = PageClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = PageClient::with_config(config).unwrap();

    let page = client.fetch_page("/api/items/", &Query::new()).await.unwrap();
    assert_eq!(page.status, 200);
}

#[tokio::test]
async fn test_fetch_page_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/report"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&mock_server)
        .await;

    let client = PageClient::new().unwrap();
    let page = client
        .fetch_page(&format!("{}/report", mock_server.uri()), &Query::new())
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert!(page.body.is_none());
}

// ============================================================================
// End-to-End Navigation
// ============================================================================

#[tokio::test]
async fn test_controller_navigation_end_to_end() {
    let mock_server = MockServer::start().await;
    let header = link_header(&mock_server.uri(), ("0:0:1", false), ("0:100:0", true));

    // First page advertises a next cursor
    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}]))
                .insert_header("link", header.as_str()),
        )
        .mount(&mock_server)
        .await;

    let client = PageClient::new().unwrap();
    let first = client
        .fetch_page(&format!("{}/api/items/", mock_server.uri()), &Query::new())
        .await
        .unwrap();

    // Wire the fetched header into a controller and capture the dispatch
    let dispatched: Arc<Mutex<Vec<(String, i8)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&dispatched);

    let controller = PaginationController::new("/api/items/", Query::new())
        .with_page_links(first.page_links.clone())
        .with_on_cursor(move |cursor, _path, _query, direction| {
            sink.lock().unwrap().push((cursor.to_string(), direction.offset()));
        });

    let controls = controller.controls().unwrap();
    assert!(!controls.previous.enabled);
    assert!(controls.next.enabled);

    assert!(!controller.activate(Direction::Previous));
    assert!(controller.activate(Direction::Next));

    let dispatched = dispatched.lock().unwrap();
    assert_eq!(dispatched.as_slice(), &[("0:100:0".to_string(), 1)]);
}

#[tokio::test]
async fn test_follow_next_links_until_exhausted() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    let first_header = link_header(&uri, ("0:0:1", false), ("0:100:0", true));
    let second_header = link_header(&uri, ("0:100:1", true), ("0:200:0", false));

    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .and(query_param("cursor", "0:100:0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 2}]))
                .insert_header("link", second_header.as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/items/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}]))
                .insert_header("link", first_header.as_str()),
        )
        .mount(&mock_server)
        .await;

    let client = PageClient::new().unwrap();
    let url = format!("{uri}/api/items/");

    let mut query = Query::new();
    let mut pages = 0;
    loop {
        let page = client.fetch_page(&url, &query).await.unwrap();
        pages += 1;
        if !page.has_next() {
            break;
        }
        query.insert(
            "cursor".to_string(),
            QueryValue::from(page.links.next.cursor.clone()),
        );
    }

    assert_eq!(pages, 2);
}
