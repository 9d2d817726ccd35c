//! 問い合わせ時間窓の解決
//!
//! `date`（`YYYY-MM-DD`）と `time`（`HH:mm`）から Prometheus range query 用の
//! Unixタイムスタンプ範囲を組み立てる。日時はUTCの壁時計時刻として解釈し、
//! ローカルタイムゾーンへの変換は行わない。

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::common::error::{MonitorError, MonitorResult};

/// 時間窓の長さ（時間）
pub const DEFAULT_WINDOW_HOURS: i64 = 6;

const DATE_FORMAT_MESSAGE: &str = "Invalid date format. Expected format: YYYY-MM-DD";
const TIME_FORMAT_MESSAGE: &str = "Invalid time format. Expected format: HH:mm (24-hour)";

/// 問い合わせ時間窓（Unix秒, UTC）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    /// 開始時刻
    pub start: i64,
    /// 終了時刻
    pub end: i64,
}

impl QueryWindow {
    /// `start` から `DEFAULT_WINDOW_HOURS` 後までの窓
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        let end = start + window_span();
        Self {
            start: start.timestamp(),
            end: end.timestamp(),
        }
    }

    /// `end` までの直近 `DEFAULT_WINDOW_HOURS` の窓
    pub fn ending_at(end: DateTime<Utc>) -> Self {
        let start = end - window_span();
        Self {
            start: start.timestamp(),
            end: end.timestamp(),
        }
    }

    /// 窓の長さ
    pub fn span(&self) -> Duration {
        Duration::seconds(self.end - self.start)
    }
}

fn window_span() -> Duration {
    Duration::hours(DEFAULT_WINDOW_HOURS)
}

/// `YYYY-MM-DD` を厳密に検証して日付へ変換する
///
/// 桁数・区切り文字が固定パターンに一致し、かつ暦上存在する日付のみ受け付ける。
pub fn parse_date(value: &str) -> MonitorResult<NaiveDate> {
    let invalid = || MonitorError::Validation(DATE_FORMAT_MESSAGE.to_string());

    let bytes = value.as_bytes();
    if !value.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let year = digits(&value[0..4]).ok_or_else(invalid)?;
    let month = digits(&value[5..7]).ok_or_else(invalid)?;
    let day = digits(&value[8..10]).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
}

/// `HH:mm`（24時間表記）を厳密に検証して時刻へ変換する
pub fn parse_time(value: &str) -> MonitorResult<NaiveTime> {
    let invalid = || MonitorError::Validation(TIME_FORMAT_MESSAGE.to_string());

    let bytes = value.as_bytes();
    if !value.is_ascii() || bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    let hour = digits(&value[0..2]).ok_or_else(invalid)?;
    let minute = digits(&value[3..5]).ok_or_else(invalid)?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// ASCII数字のみで構成される場合に数値へ変換する（符号や空白は不可）
fn digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// 任意の `date` / `time` から時間窓を決定する
///
/// - 指定された値は、もう一方の有無にかかわらず先に検証する（date → time の順）
/// - 両方揃っている場合: その時刻から6時間
/// - どちらかが欠けている場合: `now` までの直近6時間（指定された片方は使わない）
///
/// 空文字列は未指定として扱う。
pub fn resolve_window(
    date: Option<&str>,
    time: Option<&str>,
    now: DateTime<Utc>,
) -> MonitorResult<QueryWindow> {
    let date = date.filter(|s| !s.is_empty()).map(parse_date).transpose()?;
    let time = time.filter(|s| !s.is_empty()).map(parse_time).transpose()?;

    match (date, time) {
        (Some(date), Some(time)) => Ok(QueryWindow::starting_at(date.and_time(time).and_utc())),
        (None, None) => Ok(QueryWindow::ending_at(now)),
        (date, time) => {
            debug!(
                date = ?date,
                time = ?time,
                "Only one of date/time supplied, using default window"
            );
            Ok(QueryWindow::ending_at(now))
        }
    }
}
