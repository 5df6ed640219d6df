use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{self, Layer, filter};

/// Initializes the JSON logging pipeline.
///
/// Log lines roll daily under `log_path`. The default level can be
/// overridden through the `FILEMAN_LOG` environment variable; only
/// `fileman_` targets are recorded.
pub fn init_tracing(log_path: PathBuf) -> anyhow::Result<Guard> {
    let appender = tracing_appender::rolling::daily(log_path, "fileman.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let target_filter = filter::filter_fn(|metadata| metadata.target().starts_with("fileman_"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_thread_ids(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
        .with_filter(target_filter);

    let level = tracing_subscriber::EnvFilter::try_from_env("FILEMAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fileman=debug"));

    tracing_subscriber::registry().with(level).with(fmt_layer).init();

    debug!("JSON logging system initialized");
    Ok(Guard(guard))
}

/// Keeps the non-blocking writer alive; dropping it flushes pending lines.
pub struct Guard(#[allow(dead_code)] WorkerGuard);
