use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 初始化日志系统
///
/// 日志写到 stderr，stdout 只保留最后一行统计结果。
/// 未设置 `RUST_LOG` 时默认只显示警告，`verbose` 时显示 debug 日志
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
