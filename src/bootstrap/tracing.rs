//! Tracing configuration for clipper
//!
//! ## Behavior / 行为
//!
//! - Human-readable events go to **stderr**; stdout stays free for the
//!   chooser and for shell pipelines.
//! - Release builds only show warnings and errors, debug builds show the
//!   clip crates at debug level. `RUST_LOG` overrides both.
//! - `CLIPPER_LOG_FILE=1` adds a plain-text file layer under
//!   `<data root>/logs/clipper.log`.

use std::{fs, io, sync::OnceLock};

use clip_core::ports::AppDirsPort;
use clip_platform::app_dirs::DirsAppDirsAdapter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Keeps the non-blocking file writer flushing until the process exits.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_ENV: &str = "CLIPPER_LOG_FILE";
const LOG_FILE_NAME: &str = "clipper.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives used when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    if !is_dev {
        return vec!["warn".to_string()];
    }

    let mut directives = vec!["info".to_string()];
    directives.extend(
        ["clipper", "clipper_lib", "clip_core", "clip_app", "clip_infra", "clip_platform"]
            .iter()
            .map(|target| format!("{target}=debug")),
    );
    directives
}

fn file_logging_requested(value: Option<&str>) -> bool {
    matches!(
        value.map(str::trim),
        Some("1") | Some("true") | Some("yes") | Some("on")
    )
}

/// Initialize the global tracing subscriber.
///
/// Must run once, before the first event is emitted. Fails if a subscriber
/// is already registered.
///
/// ```ignore
/// fn main() {
///     if let Err(err) = clipper_lib::bootstrap::tracing::init_tracing_subscriber() {
///         eprintln!("failed to initialize logging: {err:#}");
///     }
/// }
/// ```
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if file_logging_requested(std::env::var(LOG_FILE_ENV).ok().as_deref()) {
        match build_file_writer() {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, using stderr only: {err:#}");
                None
            }
        }
    } else {
        None
    };

    // "2025-01-15 10:30:45.123  WARN clip_app::dispatcher: message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = DirsAppDirsAdapter::new().get_app_dirs()?.logs_dir();
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"info".to_string()));
        assert!(dev_directives.contains(&"clip_app=debug".to_string()));
        assert!(dev_directives.contains(&"clip_infra=debug".to_string()));
        assert!(dev_directives.contains(&"clip_platform=debug".to_string()));

        let prod_directives = build_filter_directives(false);
        assert_eq!(prod_directives, vec!["warn".to_string()]);
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        for is_dev in [true, false] {
            let joined = build_filter_directives(is_dev).join(",");
            assert!(tracing_subscriber::EnvFilter::try_new(&joined).is_ok(), "{joined}");
        }
    }

    #[test]
    fn test_file_logging_flag() {
        assert!(file_logging_requested(Some("1")));
        assert!(file_logging_requested(Some(" true ")));
        assert!(!file_logging_requested(Some("0")));
        assert!(!file_logging_requested(Some("")));
        assert!(!file_logging_requested(None));
    }
}
