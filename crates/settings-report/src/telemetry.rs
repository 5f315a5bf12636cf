use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset. Nothing the reporter logs reaches
/// this level, so stderr stays empty on a plain run.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing with an env-based filter and bridge `log` records.
///
/// - Reads `RUST_LOG` for level directives (e.g., "debug", "settings_report=trace").
/// - Defaults to [`DEFAULT_FILTER`] so a plain run prints nothing but the report.
/// - Forwards `log` crate records (reqwest, hyper) to `tracing` via `LogTracer`.
/// - Writes to stderr; stdout carries the report.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let _ = LogTracer::init();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
