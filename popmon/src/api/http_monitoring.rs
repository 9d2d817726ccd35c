//! HTTP監視API
//!
//! `GET /http_monitoring?popsite=<id>[&date=YYYY-MM-DD&time=HH:mm]`
//!
//! popsite 単位で `probe_http_status_code` 系列を取得し、
//! short-name → 0/1 のヘルスフラグ列として返す。

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use super::error::AppError;
use crate::common::error::MonitorError;
use crate::prometheus::QueryOutcome;
use crate::transform::transform_series;
use crate::types::TransformedOutput;
use crate::window::resolve_window;
use crate::AppState;

/// クエリパラメーター
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpMonitoringQuery {
    /// 対象popsite（必須）
    pub popsite: Option<String>,
    /// 開始日（`YYYY-MM-DD`）
    pub date: Option<String>,
    /// 開始時刻（`HH:mm`, 24時間表記）
    pub time: Option<String>,
}

/// GET /http_monitoring
pub async fn get_http_monitoring(
    State(state): State<AppState>,
    query: Result<Query<HttpMonitoringQuery>, QueryRejection>,
) -> Result<Json<TransformedOutput>, AppError> {
    // 重複キー等のデコード失敗も JSON の 400 として返す
    let Query(query) = query.map_err(|rejection| {
        info!(error = %rejection.body_text(), "Rejected http_monitoring query string");
        MonitorError::Validation(rejection.body_text())
    })?;

    let popsite = match query.popsite.as_deref() {
        Some(popsite) if !popsite.is_empty() => popsite,
        _ => return Err(MonitorError::popsite_required().into()),
    };

    let window = resolve_window(query.date.as_deref(), query.time.as_deref(), Utc::now())
        .inspect_err(|err| {
            info!(popsite = %popsite, error = %err, "Rejected http_monitoring request");
        })?;

    match state.prometheus.query_popsite(popsite, window).await {
        QueryOutcome::Data(series) => Ok(Json(transform_series(&series))),
        QueryOutcome::Empty => {
            info!(popsite = %popsite, "No series matched popsite");
            Err(MonitorError::popsite_not_found(popsite).into())
        }
        QueryOutcome::Failed(err) => {
            // バックエンド障害も「該当なし」として返す（既存クライアント互換）
            warn!(popsite = %popsite, error = %err, "Prometheus query failed");
            Err(MonitorError::popsite_not_found(popsite).into())
        }
    }
}
