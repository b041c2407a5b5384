use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, defaults to info-level output for this crate
/// otherwise. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("travel_budget=info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
