//! End-to-end routing tests against a live server.

use std::time::Duration;

use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_named_routes_served() {
    let server = common::start_server().await;
    let client = common::client();

    for (path, view) in [("/", "default"), ("/home", "home_page")] {
        let res = client.get(server.url(path)).send().await.expect("server unreachable");
        assert_eq!(res.status(), StatusCode::OK, "GET {path}");
        assert_eq!(res.headers()["x-view"], view, "GET {path}");
    }

    // Views accept any method.
    let res = client.post(server.url("/home")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-view"], "home_page");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_paths_not_found() {
    let server = common::start_server().await;
    let client = common::client();

    for path in ["/nonexistent", "/home/", "/HOME", "/home/page"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {path}");
        assert!(!res.headers().contains_key("x-view"), "GET {path}");
    }

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_query_string_ignored_for_matching() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/home?tab=news"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_every_response_has_request_id() {
    let server = common::start_server().await;
    let client = common::client();

    let ok = client.get(server.url("/")).send().await.unwrap();
    let missing = client.get(server.url("/missing")).send().await.unwrap();

    let first = ok.headers()["x-request-id"].to_str().unwrap().to_string();
    let second = missing.headers()["x-request-id"].to_str().unwrap().to_string();
    assert!(!first.is_empty());
    assert_ne!(first, second);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server().await;

    let res = common::client().get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    server.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
