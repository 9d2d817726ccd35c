//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to the legacy variable names used by earlier deployments, and the
//! immutable [`MonitorConfig`] built once at startup.

use std::time::Duration;

use crate::common::error::{MonitorError, MonitorResult};

/// デフォルトのPrometheus URL
pub const DEFAULT_PROMETHEUS_URL: &str = "http://localhost:9090";
/// デフォルトのメトリクス名
pub const DEFAULT_METRIC: &str = "probe_http_status_code";
/// デフォルトの待受ポート
pub const DEFAULT_PORT: u16 = 5000;
/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// バックエンド問い合わせのデフォルトタイムアウト（秒）
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use popmon::config::get_env_with_fallback;
///
/// let url = get_env_with_fallback("POPMON_PROMETHEUS_URL", "PROMETHEUS_URL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Prometheusの認証情報（Basic認証）
#[derive(Clone, PartialEq, Eq)]
pub struct BackendCredentials {
    /// ユーザー名
    pub username: String,
    /// パスワード
    pub password: Option<String>,
}

impl std::fmt::Debug for BackendCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// プロセス全体の設定（起動時に一度だけ構築し、以後は読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// PrometheusのベースURL
    pub prometheus_url: String,
    /// Basic認証情報（未設定なら認証なし）
    pub credentials: Option<BackendCredentials>,
    /// 問い合わせ対象のメトリクス名
    pub metric: String,
    /// バックエンド問い合わせのタイムアウト
    pub backend_timeout: Duration,
    /// バインドアドレス
    pub host: String,
    /// 待受ポート
    pub port: u16,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            prometheus_url: DEFAULT_PROMETHEUS_URL.to_string(),
            credentials: None,
            metric: DEFAULT_METRIC.to_string(),
            backend_timeout: Duration::from_secs(DEFAULT_BACKEND_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl MonitorConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        let prometheus_url = get_env_with_fallback_or(
            "POPMON_PROMETHEUS_URL",
            "PROMETHEUS_URL",
            DEFAULT_PROMETHEUS_URL,
        );
        let username = get_env_with_fallback("POPMON_PROMETHEUS_USER", "PROMETHEUS_USER")
            .filter(|s| !s.is_empty());
        let password = get_env_with_fallback("POPMON_PROMETHEUS_PASSWORD", "PROMETHEUS_PASSWORD");
        let credentials = username.map(|username| BackendCredentials { username, password });
        let metric = get_env_with_fallback_or("POPMON_PROMQL", "PROMQL", DEFAULT_METRIC);
        let timeout_secs = get_env_with_fallback_parse(
            "POPMON_BACKEND_TIMEOUT_SECS",
            "POPMON_BACKEND_TIMEOUT_SECS",
            DEFAULT_BACKEND_TIMEOUT_SECS,
        );
        let host = get_env_with_fallback_or("POPMON_HOST", "POPMON_HOST", DEFAULT_HOST);
        let port = get_env_with_fallback_parse("POPMON_PORT", "PORT", DEFAULT_PORT);

        Self {
            prometheus_url,
            credentials,
            metric,
            backend_timeout: Duration::from_secs(timeout_secs),
            host,
            port,
        }
    }

    /// 指定された項目だけバインド先を上書きした設定を返す（CLI引数用）
    pub fn with_bind_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// 設定値の妥当性を検証する
    pub fn validate(&self) -> MonitorResult<()> {
        let url = self.prometheus_url.trim();
        if url.is_empty() {
            return Err(MonitorError::Config(
                "Prometheus URL must not be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(MonitorError::Config(format!(
                "Prometheus URL must start with http:// or https://: {}",
                url
            )));
        }
        if self.metric.trim().is_empty() {
            return Err(MonitorError::Config(
                "Metric name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
