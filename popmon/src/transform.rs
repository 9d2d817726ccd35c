//! 系列変換
//!
//! Prometheusの range query 結果を、short-name をキーとした
//! 0/1 のヘルスフラグ列へ変換する。I/Oを持たない純粋関数のみで構成する。

use crate::types::{RawSeries, TransformedOutput};

/// `instance` ラベルが無い系列に使う名前
pub const UNKNOWN_NAME: &str = "unknown";

/// 正常とみなすHTTPステータスコード
pub const HEALTHY_STATUS_CODES: [i64; 3] = [200, 301, 302];

/// フラグ: 正常
pub const FLAG_HEALTHY: u8 = 0;
/// フラグ: 異常
pub const FLAG_UNHEALTHY: u8 = 1;

/// `instance` ラベルから short-name を導出する
///
/// スキーム（`http://` / `https://`）と先頭の `www.` を除去し、
/// 最初の `.` より前を返す。
///
/// ```
/// use popmon::transform::short_name;
///
/// assert_eq!(short_name(Some("https://www.playstation.com/status")), "playstation");
/// assert_eq!(short_name(Some("example.org")), "example");
/// assert_eq!(short_name(None), "unknown");
/// ```
pub fn short_name(instance: Option<&str>) -> String {
    let Some(url) = instance else {
        return UNKNOWN_NAME.to_string();
    };

    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = host.strip_prefix("www.").unwrap_or(host);

    host.split('.').next().unwrap_or_default().to_string()
}

/// ステータス値をヘルスフラグへ変換する
///
/// 先頭の整数部分のみを読む（`"200"`, `"200.0"` はどちらも 200）。
/// 整数として読めない値は異常扱い。
pub fn status_flag(value: &str) -> u8 {
    match leading_integer(value) {
        Some(code) if HEALTHY_STATUS_CODES.contains(&code) => FLAG_HEALTHY,
        _ => FLAG_UNHEALTHY,
    }
}

fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// 系列集合を short-name → フラグ列 へ変換する
///
/// 同じ short-name に解決される系列が複数ある場合は、入力順で後のものが勝つ。
/// 各系列のフラグ順はサンプル順をそのまま保持する。
pub fn transform_series(series: &[RawSeries]) -> TransformedOutput {
    let mut output = TransformedOutput::new();

    for item in series {
        let name = short_name(item.instance());
        let flags = item
            .points
            .iter()
            .map(|point| status_flag(&point.value))
            .collect();
        output.insert(name, flags);
    }

    output
}
