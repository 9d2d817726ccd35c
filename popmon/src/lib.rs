//! popmon Server
//!
//! Prometheusの `probe_http_status_code` を popsite 単位で取得し、
//! 監視対象ごとの 0/1 ヘルスフラグ列へ変換して返すHTTPサーバー

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// Prometheusクライアント
pub mod prometheus;

/// axumサーバー起動
pub mod server;

/// 系列変換
pub mod transform;

/// 型定義
pub mod types;

/// 問い合わせ時間窓
pub mod window;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 起動時に確定した設定
    pub config: Arc<config::MonitorConfig>,
    /// Prometheusクライアント（接続プーリング有効）
    pub prometheus: prometheus::PrometheusClient,
}

impl AppState {
    /// 設定からアプリケーション状態を構築する
    pub fn new(config: config::MonitorConfig) -> common::error::MonitorResult<Self> {
        config.validate()?;
        let config = Arc::new(config);
        let prometheus = prometheus::PrometheusClient::new(config.clone())?;
        Ok(Self { config, prometheus })
    }
}
