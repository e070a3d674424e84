//! Integration tests for the health endpoint.
//!
//! Most tests drive the router in-process with `tower::ServiceExt::oneshot`.
//! The last one binds a real socket on an ephemeral port and talks raw HTTP/1.1.
//!
//! Run with: cargo test --test health_tests

use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum_server::Handle;
use build_test::create_router;
use http_body_util::BodyExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;
use uuid::Uuid;

async fn send(method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    create_router().oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn router_builds_without_external_resources() {
    let _app = create_router();
}

#[tokio::test]
async fn health_returns_ok() {
    let response = send(Method::GET, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn health_is_plain_text_and_uncached() {
    let response = send(Method::GET, "/health").await;
    let headers = response.headers();

    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
}

#[tokio::test]
async fn health_ignores_query_string_and_headers() {
    let request = Request::builder()
        .uri("/health?verbose=true")
        .header(header::ACCEPT, "application/json")
        .header(header::AUTHORIZATION, "Bearer whatever")
        .body(Body::empty())
        .unwrap();

    let response = create_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn every_response_gets_a_distinct_request_id() {
    let mut seen = HashSet::new();

    for _ in 0..10 {
        let response = send(Method::GET, "/health").await;
        let id = response
            .headers()
            .get("x-request-id")
            .expect("missing x-request-id")
            .to_str()
            .unwrap()
            .to_string();

        Uuid::parse_str(&id).expect("request id is not a UUID");
        assert!(seen.insert(id), "request id reused");
    }
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let app = create_router();

    for _ in 0..50 {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_each_return_ok() {
    let app = create_router();

    let tasks = (0..64).map(|_| {
        let app = app.clone();
        tokio::spawn(async move {
            let request = Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap();
            let response = app.oneshot(request).await.unwrap();
            (response.status(), body_string(response).await)
        })
    });

    for result in futures::future::join_all(tasks).await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}

#[tokio::test]
async fn head_has_status_but_no_body() {
    let response = send(Method::HEAD, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "");
}

#[tokio::test]
async fn post_is_method_not_allowed() {
    let response = send(Method::POST, "/health").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response.headers().get(header::ALLOW).unwrap().to_str().unwrap();
    assert!(allow.contains("GET"), "Allow header was {allow}");
}

#[tokio::test]
async fn unknown_path_is_plain_text_404() {
    let response = send(Method::GET, "/healthz").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_string(response).await, "Not found: /healthz");
}

#[tokio::test]
async fn serves_over_tcp_and_shuts_down() {
    let handle = Handle::new();
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = tokio::spawn(build_test::http::serve(
        create_router(),
        addr,
        handle.clone(),
    ));

    let bound = tokio::time::timeout(Duration::from_secs(5), handle.listening())
        .await
        .expect("server did not start listening")
        .expect("server failed to bind");

    let mut stream = tokio::net::TcpStream::connect(bound).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"), "got: {raw}");
    assert!(raw.ends_with("\r\n\r\nOK"), "got: {raw}");

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
    tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();
}
