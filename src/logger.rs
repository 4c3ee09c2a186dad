use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber. Verbosity comes from `RUST_LOG`, `info` by default.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events(&env_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Per-step span timings are only reported when something is enabled at `debug` or finer.
fn span_events(filter: &EnvFilter) -> FmtSpan {
    match filter.max_level_hint() {
        Some(level) if level >= LevelFilter::DEBUG => FmtSpan::CLOSE,
        _ => FmtSpan::NONE,
    }
}
