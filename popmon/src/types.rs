//! 型定義
//!
//! Prometheusから取得した生の系列と、クライアントへ返す変換後の形。
//! いずれも1リクエストの中で生成・破棄され、永続化はしない。

use std::collections::{BTreeMap, HashMap};

/// 監視対象URLを表すラベル名
pub const INSTANCE_LABEL: &str = "instance";

/// 1サンプル（Unix秒, 文字列化されたステータスコード）
#[derive(Debug, Clone, PartialEq)]
pub struct RawPoint {
    /// サンプル時刻（Unix秒）
    pub timestamp: f64,
    /// ステータス値（例: `"200"`）
    pub value: String,
}

impl RawPoint {
    /// 新しいサンプルを作成
    pub fn new(timestamp: f64, value: impl Into<String>) -> Self {
        Self {
            timestamp,
            value: value.into(),
        }
    }
}

/// ラベル付きの1系列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSeries {
    /// ラベル名 → ラベル値
    pub labels: HashMap<String, String>,
    /// 時刻順のサンプル列
    pub points: Vec<RawPoint>,
}

impl RawSeries {
    /// `instance` ラベルの値
    pub fn instance(&self) -> Option<&str> {
        self.labels.get(INSTANCE_LABEL).map(String::as_str)
    }
}

/// short-name → ヘルスフラグ列（0 = 正常, 1 = 異常）
pub type TransformedOutput = BTreeMap<String, Vec<u8>>;
