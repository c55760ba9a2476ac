//!
//! src/logging.rs  Andrew Belles  Oct 19th, 2026
//!
//! Initializes logger so the crawler gives informative, structured
//! output for both fatal and degraded-but-continuing outcomes
//!
//!

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tracing_error::ErrorLayer;
use tracing_appender::non_blocking;

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::ScraperError;

/// Must be held until exit, dropping it stops the background writer.
pub struct LoggingGuard(tracing_appender::non_blocking::WorkerGuard);

fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    std::env::var("RUST_LOG")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(cfg.filter_directives.clone()))
}

pub fn init_logging(cfg: &LoggingConfig) -> Result<LoggingGuard, ScraperError> {
    let (writer, guard) = non_blocking(std::io::stdout());
    let filter = build_filter(cfg);
    let time = fmt::time::UtcTime::rfc_3339();

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let installed = match cfg.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(writer)
                .with_timer(time)
                .with_target(cfg.include_target)
                .with_file(cfg.include_file_line)
                .with_line_number(cfg.include_file_line)
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(true);
            registry.with(fmt_layer).try_init()
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(writer)
                .with_timer(time)
                .with_ansi(cfg.with_ansi)
                .with_target(cfg.include_target)
                .with_file(cfg.include_file_line)
                .with_line_number(cfg.include_file_line)
                .pretty();
            registry.with(fmt_layer).try_init()
        }
    };

    installed.map_err(|e| ScraperError::Config(format!("install subscriber: {e}")))?;
    Ok( LoggingGuard(guard) )
}
