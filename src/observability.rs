//! Tracing init. Call once at process startup.
//!
//! Uses `config::ObservabilityConfig` for QGRAPHIC_QUIET, QGRAPHIC_LOG_LEVEL
//! and QGRAPHIC_LOG_JSON. `RUST_LOG`, when set, wins over all of them.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. When QGRAPHIC_QUIET is truthy, only WARN and above
/// are logged; a default launch prints nothing from the launcher itself.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let level: &str = if cfg.quiet {
        "qgraphic_launcher=warn"
    } else {
        &cfg.log_level
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
}
