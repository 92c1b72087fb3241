use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "kuchipaku_core=debug,kuchipaku_cli=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber.
///
/// Logs go to stderr, or as JSON lines to `<log_dir>/kuchipaku-trace.jsonl`.
/// The returned guard flushes the file writer and must be held until exit.
pub fn init_tracing(verbose: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "kuchipaku-trace.jsonl");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .with_env_filter(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_env_filter(filter)
                .init();
            None
        }
    }
}
