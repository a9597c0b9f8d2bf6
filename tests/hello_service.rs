//! The hello view against a mock upstream.

use serde_json::Value;

mod common;

use common::{client, closed_port, config_with_fallback, start_mock_backend, start_server};

#[tokio::test]
async fn test_hello_returns_trimmed_greeting() {
    let backend = start_mock_backend(200, "  hello from upstream\n").await;
    let mut config = config_with_fallback(None);
    config.services.hello_url = format!("http://{}", backend);
    let server = start_server(config).await;

    let json: Value = client()
        .get(server.url("/app/hello/"))
        .header("x-forwarded-prefix", "/app")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["hello"], "hello from upstream");
}

#[tokio::test]
async fn test_hello_unreachable_degrades() {
    let addr = closed_port().await;
    let mut config = config_with_fallback(None);
    config.services.hello_url = format!("http://{}", addr);
    let server = start_server(config).await;

    let res = client().get(server.url("/hello/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let json: Value = res.json().await.unwrap();
    assert_eq!(json["hello"], "(failed to contact hello service)");
}

#[tokio::test]
async fn test_hello_error_status_degrades() {
    let backend = start_mock_backend(503, "busy").await;
    let mut config = config_with_fallback(None);
    config.services.hello_url = format!("http://{}", backend);
    let server = start_server(config).await;

    let json: Value = client()
        .get(server.url("/hello/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["hello"], "(failed to contact hello service)");
}
