//! Logging - Tracing Subscriber Setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::LogConfig;
use crate::helpers::get_or_create_log_dir;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. When file logging
/// is enabled the returned guard must be held until exit so buffered lines
/// are flushed.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let mut guard = None;
    let mut file_error = None;

    let file_layer = if config.file {
        match get_or_create_log_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, "signin-gui.log");
                let (writer, worker_guard) = tracing_appender::non_blocking(appender);
                guard = Some(worker_guard);
                Some(fmt::layer().with_ansi(false).with_writer(writer).boxed())
            }
            Err(e) => {
                file_error = Some(e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "File logging disabled");
    }

    guard
}
