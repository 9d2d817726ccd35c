//! ロギング初期化
//!
//! `RUST_LOG` が設定されていればそれを優先し、無ければ `POPMON_LOG_LEVEL`
//! （既定: `info`）を使う。`POPMON_LOG_FORMAT=json` でJSON出力に切り替える。

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::get_env_with_fallback_or;

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人間向けテキスト
    Text,
    /// 構造化JSON
    Json,
}

impl LogFormat {
    /// 文字列から出力形式を決定する（不明な値はテキスト）
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level =
            get_env_with_fallback_or("POPMON_LOG_LEVEL", "POPMON_LOG_LEVEL", DEFAULT_LOG_LEVEL);
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    })
}

/// グローバルsubscriberを初期化する
pub fn init() -> Result<(), String> {
    let format = LogFormat::parse(&get_env_with_fallback_or(
        "POPMON_LOG_FORMAT",
        "POPMON_LOG_FORMAT",
        "text",
    ));
    let builder = fmt().with_env_filter(build_filter()).with_target(true);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    result.map_err(|err| err.to_string())
}
