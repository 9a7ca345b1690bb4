//! Logging Infrastructure
//!
//! Logs go to stderr (or a rolling file) so stdout carries only JSON output.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger.
///
/// `RUST_LOG` wins over `level`. When `log_dir` exists, output goes to a daily
/// rolling file instead of stderr.
pub fn init_logger(level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "price-quote");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.with_writer(std::io::stderr).init();
}
