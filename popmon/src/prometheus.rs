//! Prometheus range query クライアント
//!
//! `GET {base_url}/api/v1/query_range` に対し、popsite ラベルで絞り込んだ
//! クエリを発行し、結果を [`QueryOutcome`] として返す。
//! 失敗の扱い（404に畳み込むかどうか）は呼び出し側が決める。

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::error::{MonitorError, MonitorResult};
use crate::config::MonitorConfig;
use crate::types::{RawPoint, RawSeries};
use crate::window::QueryWindow;

/// range query のサンプリング間隔
pub const QUERY_STEP: &str = "60s";

/// range query API のパス
pub const QUERY_RANGE_PATH: &str = "/api/v1/query_range";

/// range query の結果
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// 1件以上の系列が得られた
    Data(Vec<RawSeries>),
    /// 問い合わせは成功したが該当系列なし
    Empty,
    /// 通信失敗・非2xx・不正なペイロード（常に [`MonitorError::Backend`]）
    Failed(MonitorError),
}

/// query_range レスポンス（必要な部分のみ）
#[derive(Debug, Deserialize)]
struct QueryRangeResponse {
    data: QueryRangeData,
}

#[derive(Debug, Deserialize)]
struct QueryRangeData {
    result: Vec<Value>,
}

/// `<metric>{popsite="<popsite>"}` 形式のクエリ式を組み立てる
///
/// ラベル値中の `\` と `"` はエスケープする。
pub fn build_query(metric: &str, popsite: &str) -> String {
    let escaped = popsite.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{}{{popsite=\"{}\"}}", metric, escaped)
}

/// Prometheus クライアント
#[derive(Clone)]
pub struct PrometheusClient {
    http_client: Client,
    config: Arc<MonitorConfig>,
}

impl PrometheusClient {
    /// 設定からクライアントを作成（タイムアウトは設定値を使用）
    pub fn new(config: Arc<MonitorConfig>) -> MonitorResult<Self> {
        let http_client = Client::builder()
            .timeout(config.backend_timeout)
            .build()
            .map_err(|err| MonitorError::Internal(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self::with_client(http_client, config))
    }

    /// 既存のHTTPクライアントを共有して作成
    pub fn with_client(http_client: Client, config: Arc<MonitorConfig>) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn query_range_url(&self) -> String {
        format!(
            "{}{}",
            self.config.prometheus_url.trim_end_matches('/'),
            QUERY_RANGE_PATH
        )
    }

    /// popsite と時間窓で range query を発行する
    pub async fn query_popsite(&self, popsite: &str, window: QueryWindow) -> QueryOutcome {
        let query = build_query(&self.config.metric, popsite);
        let url = self.query_range_url();

        debug!(
            url = %url,
            query = %query,
            start = window.start,
            end = window.end,
            "Querying Prometheus"
        );

        let start = window.start.to_string();
        let end = window.end.to_string();
        let mut request = self.http_client.get(&url).query(&[
            ("query", query.as_str()),
            ("start", start.as_str()),
            ("end", end.as_str()),
            ("step", QUERY_STEP),
        ]);
        if let Some(credentials) = &self.config.credentials {
            request = request.basic_auth(&credentials.username, credentials.password.as_ref());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return backend_failure(format!("request failed: {err}")),
        };

        let status = response.status();
        if !status.is_success() {
            return backend_failure(format!("non-success status: {status}"));
        }

        match response.json::<QueryRangeResponse>().await {
            Ok(body) => outcome_from_results(&body.data.result),
            Err(err) => backend_failure(format!("malformed response: {err}")),
        }
    }
}

fn backend_failure(cause: String) -> QueryOutcome {
    QueryOutcome::Failed(MonitorError::Backend(cause))
}

fn outcome_from_results(results: &[Value]) -> QueryOutcome {
    if results.is_empty() {
        return QueryOutcome::Empty;
    }

    let series: Vec<RawSeries> = results.iter().filter_map(decode_series).collect();
    if series.is_empty() {
        // 全系列が不正な形式だった場合は該当なしと同じ扱い
        warn!(
            count = results.len(),
            "All series in Prometheus response were malformed"
        );
        return QueryOutcome::Empty;
    }
    QueryOutcome::Data(series)
}

/// 1系列をデコードする。形式が不正な系列は `None`、不正なサンプルは読み飛ばす。
fn decode_series(value: &Value) -> Option<RawSeries> {
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            warn!("Skipping series that is not a JSON object");
            return None;
        }
    };

    let labels: HashMap<String, String> = object
        .get("metric")
        .and_then(Value::as_object)
        .map(|metric| {
            metric
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default();

    let Some(values) = object.get("values").and_then(Value::as_array) else {
        warn!(labels = ?labels, "Skipping series without a values array");
        return None;
    };

    let points = values
        .iter()
        .filter_map(|sample| {
            let point = decode_point(sample);
            if point.is_none() {
                warn!(sample = %sample, "Skipping malformed sample");
            }
            point
        })
        .collect();

    Some(RawSeries { labels, points })
}

/// `[timestamp, "value"]` を読む
fn decode_point(sample: &Value) -> Option<RawPoint> {
    let pair = sample.as_array()?;
    if pair.len() != 2 {
        return None;
    }
    let timestamp = pair[0].as_f64()?;
    let value = match &pair[1] {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(RawPoint::new(timestamp, value))
}
