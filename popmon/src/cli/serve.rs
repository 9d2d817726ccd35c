//! serve サブコマンド
//!
//! 監視サーバーを起動します。

use clap::Args;

/// serve サブコマンドの引数
///
/// 未指定の項目は `MonitorConfig::from_env()` の値（レガシーの `PORT` を含む）を使う。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port [default: 5000]
    #[arg(short, long, env = "POPMON_PORT")]
    pub port: Option<u16>,

    /// Bind address [default: 0.0.0.0]
    #[arg(short = 'H', long, env = "POPMON_HOST")]
    pub host: Option<String>,
}
