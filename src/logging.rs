use tracing_subscriber::EnvFilter;

/// ログ出力の初期化（stderr、`RUST_LOG` 優先）
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ai_tools={level},ai_tools_common={level},ai_tools_desktop={level}"
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
