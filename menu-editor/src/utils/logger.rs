//! Logging Infrastructure
//!
//! The terminal is owned by the UI, so nothing is written to stdout. Events go
//! to the tui-logger panel and, when a log directory exists, to a daily file.

use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let file_layer = existing_log_dir(log_dir).map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, "menu-editor");
        tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(file_layer)
        .with(env_filter)
        .try_init()?;

    // Dependencies that log through the `log` crate
    let level = log_level.parse().unwrap_or(log::LevelFilter::Info);
    tui_logger::init_logger(level).ok();
    tui_logger::set_default_level(level);

    Ok(())
}

/// Log directory, only if it is present on disk
fn existing_log_dir(log_dir: Option<&str>) -> Option<&Path> {
    log_dir.map(Path::new).filter(|p| p.is_dir())
}
