use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ログ出力を初期化する
///
/// `RUST_LOG` が優先され、未指定時は `--verbose` で debug、通常は warn。
/// 標準出力はコマンド結果専用なのでログは標準エラーに出す。
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // 初期化済みなら既存の設定を使う
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
