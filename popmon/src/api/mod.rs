//! REST APIハンドラー

/// エラーレスポンス
pub mod error;
/// ヘルスチェック
pub mod health;
/// HTTP監視API
pub mod http_monitoring;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// ルーターを作成する
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/http_monitoring", get(http_monitoring::get_http_monitoring))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
