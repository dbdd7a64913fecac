//! Integration tests for `ShopClient` using wiremock HTTP mocks.

use podsweep_client::{ClientError, ShopClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ShopClient {
    ShopClient::with_base_url("test-token", 30, 0, 0, base_url)
        .expect("client construction should not fail")
}

/// Same as [`test_client`] but with one retry and no backoff delay.
fn retrying_client(base_url: &str) -> ShopClient {
    ShopClient::with_base_url("test-token", 30, 1, 0, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_products_page_parses_page() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [
            { "id": "5d39b159e7c48c000728c89f", "title": "Classic Tee", "visible": true, "tags": [] },
            { "id": "5d39b159e7c48c000728c8a0", "title": "Ceramic Mug", "visible": true, "tags": ["kitchen"] }
        ],
        "current_page": 1,
        "last_page": 3,
        "total": 117
    });

    Mock::given(method("GET"))
        .and(path("/shops/99001/products.json"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .fetch_products_page("99001", 1, 50)
        .await
        .expect("should parse page");

    assert_eq!(page.current_page, 1);
    assert_eq!(page.last_page, 3);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, "5d39b159e7c48c000728c89f");
    assert_eq!(page.data[1].title, "Ceramic Mug");
}

#[tokio::test]
async fn fetch_products_page_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/99001/products.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_products_page("99001", 1, 50)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }), "got: {err:?}");
}

#[tokio::test]
async fn fetch_products_page_maps_429_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/99001/products.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_products_page("99001", 1, 50)
        .await
        .unwrap_err();

    match err {
        ClientError::RateLimited {
            retry_after_secs, ..
        } => assert_eq!(retry_after_secs, 30),
        other => panic!("expected RateLimited, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_products_page_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shops/99001/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_products_page("99001", 1, 50)
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Deserialize { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_products_page_retries_transient_500_then_succeeds() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [ { "id": "p1", "title": "Poster" } ],
        "current_page": 1,
        "last_page": 1
    });

    // First attempt fails with a 500; retry succeeds.
    Mock::given(method("GET"))
        .and(path("/shops/99001/products.json"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shops/99001/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = retrying_client(&server.uri());
    let page = client
        .fetch_products_page("99001", 1, 50)
        .await
        .expect("retry should recover from transient 500");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "p1");
}

#[tokio::test]
async fn delete_product_succeeds_on_200() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/shops/99001/products/5d39b159e7c48c000728c89f.json"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .delete_product("99001", "5d39b159e7c48c000728c89f")
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn delete_product_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/shops/99001/products/gone.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.delete_product("99001", "gone").await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }), "got: {err:?}");
}

#[tokio::test]
async fn delete_product_preserves_error_body_on_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/shops/99001/products/locked.json"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string("product is locked by a pending order"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.delete_product("99001", "locked").await.unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 422);
            assert!(body.contains("pending order"), "body was: {body}");
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}
