use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Directory and file name prefix of the rolling log file
const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "agent-bridge.log";

/// Installs the global subscriber.
///
/// Everything goes to stderr: stdout carries the JSON result and nothing
/// else. With `with_file`, records are also appended to a daily rotated file
/// under `logs/`.
///
/// # Arguments
///
/// * `log_level` - `EnvFilter` directive (e.g. "warn", "agent_bridge=debug")
/// * `with_file` - Whether to also log to the rolling file
pub fn init_logging(log_level: &str, with_file: bool) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'warn'", log_level);
        EnvFilter::new("warn")
    });

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = with_file.then(|| {
        fmt::layer()
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(RollingFileAppender::new(
                Rotation::DAILY,
                LOG_DIR,
                LOG_FILE_PREFIX,
            ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}
