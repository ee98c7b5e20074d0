use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的过滤指令
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "burring=debug" } else { "burring=warn" }
}

/// 初始化日志。`RUST_LOG` 优先，否则按 verbose 选择 debug 或 warn 级别
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
