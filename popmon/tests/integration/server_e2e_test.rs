//! Integration Test: 実ポートで起動したサーバーへのHTTPリクエスト

use futures::future::join_all;
use reqwest::Client;
use serde_json::{json, Value};

use crate::support::http::spawn_server;
use crate::support::prometheus::{series, start_mock_prometheus_with_result};
use crate::support::test_state;

#[tokio::test]
async fn test_http_monitoring_end_to_end() {
    let mock = start_mock_prometheus_with_result(json!([series(
        "api.test.com",
        "tokyo-1",
        json!([[1000, "200"], [1060, "503"], [1120, "301"]])
    )]))
    .await;
    let server = spawn_server(test_state(&mock.uri())).await;
    let client = Client::new();

    let response = client
        .get(server.url("/http_monitoring"))
        .query(&[("popsite", "tokyo-1")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"api": [0, 1, 0]}));

    let response = client
        .get(server.url("/http_monitoring"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let mock = start_mock_prometheus_with_result(json!([series(
        "https://www.example.com",
        "tokyo-1",
        json!([[1000, "200"], [1060, "200"]])
    )]))
    .await;
    let server = spawn_server(test_state(&mock.uri())).await;
    let client = Client::new();

    let requests = (0..8).map(|_| {
        let client = client.clone();
        let url = server.url("/http_monitoring?popsite=tokyo-1");
        async move {
            let response = client.get(url).send().await.unwrap();
            assert_eq!(response.status().as_u16(), 200);
            response.json::<Value>().await.unwrap()
        }
    });
    let bodies = join_all(requests).await;

    for body in bodies {
        assert_eq!(body, json!({"example": [0, 0]}));
    }

    server.stop().await;
}
