//! テスト用サポートユーティリティ

#![allow(dead_code)]

pub mod http;
pub mod prometheus;

use axum::Router;
use popmon::{api, config::MonitorConfig, AppState};

/// 指定Prometheus URLを向いたアプリケーション状態を作成する
pub fn test_state(prometheus_url: &str) -> AppState {
    test_state_with(MonitorConfig {
        prometheus_url: prometheus_url.to_string(),
        ..MonitorConfig::default()
    })
}

/// 任意の設定でアプリケーション状態を作成する
pub fn test_state_with(config: MonitorConfig) -> AppState {
    AppState::new(config).expect("Failed to build test state")
}

/// 指定Prometheus URLを向いたルーターを作成する
pub fn test_app(prometheus_url: &str) -> Router {
    api::create_app(test_state(prometheus_url))
}
