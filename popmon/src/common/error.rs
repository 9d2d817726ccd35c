//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `MonitorError`は`status_code()`と`external_message()`を提供し、
//! APIレイヤーはこれを `{ "error": <message> }` 形式のレスポンスへ変換する。

use axum::http::StatusCode;
use thiserror::Error;

/// popmon error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonitorError {
    /// 入力値の検証エラー（メッセージはそのままクライアントへ返す）
    #[error("{0}")]
    Validation(String),

    /// 該当データなし（メッセージはそのままクライアントへ返す）
    #[error("{0}")]
    NotFound(String),

    /// Prometheusバックエンドへの問い合わせ失敗
    #[error("Backend error: {0}")]
    Backend(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MonitorError {
    /// popsite未指定時のエラー
    pub fn popsite_required() -> Self {
        Self::Validation("Popsite is required".to_string())
    }

    /// 指定popsiteのデータが存在しない場合のエラー
    pub fn popsite_not_found(popsite: &str) -> Self {
        Self::NotFound(format!("Popsite '{}' not found in Prometheus data", popsite))
    }

    /// Returns a safe error message for external clients.
    ///
    /// Validation / NotFound はドキュメント化されたメッセージをそのまま返す。
    /// それ以外はバックエンドURL等の内部情報を含み得るため、汎用メッセージに置き換える。
    /// 詳細は `Display` 実装でログにのみ出力する。
    pub fn external_message(&self) -> String {
        match self {
            Self::Validation(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Backend(_) => "Backend service unavailable".to_string(),
            Self::Config(_) => "Server misconfigured".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Backend(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias
pub type MonitorResult<T> = Result<T, MonitorError>;
