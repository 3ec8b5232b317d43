use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 終端機用的精簡輸出
    Compact,
    /// JSON 行，給集中收集日誌的主機使用
    Json,
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "nearby_bikermeets=debug,info"
    } else {
        "nearby_bikermeets=info"
    }
}

/// RUST_LOG 優先，否則依 verbose 決定等級
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

// 日誌一律寫到 stderr，stdout 保留給渲染出的 HTML/JSON
pub fn init_logger(format: LogFormat, verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}
