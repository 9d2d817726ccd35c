//! Prometheus query_range API のモック

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// `query_range` の成功レスポンスを組み立てる
pub fn matrix_response(result: Value) -> Value {
    json!({
        "status": "success",
        "data": {
            "resultType": "matrix",
            "result": result
        }
    })
}

/// `instance` ラベル付きの1系列
pub fn series(instance: &str, popsite: &str, values: Value) -> Value {
    json!({
        "metric": {
            "__name__": "probe_http_status_code",
            "instance": instance,
            "popsite": popsite,
            "job": "blackbox"
        },
        "values": values
    })
}

/// 任意のレスポンスを返すモックPrometheusを起動する
pub async fn start_mock_prometheus(template: ResponseTemplate) -> MockServer {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/query_range"))
        .respond_with(template)
        .mount(&mock)
        .await;
    mock
}

/// 指定の結果配列を返すモックPrometheusを起動する
pub async fn start_mock_prometheus_with_result(result: Value) -> MockServer {
    start_mock_prometheus(ResponseTemplate::new(200).set_body_json(matrix_response(result))).await
}
