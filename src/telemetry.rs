//! Opt-in tracing setup for applications embedding the chart engine.
//!
//! Nothing here runs implicitly. Hosts either call
//! [`init_default_tracing`] once at startup or install their own
//! subscriber with whatever filtering they need; the engine itself only
//! ever emits events.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, falling
/// back to `info`. Compiled to a no-op unless the `telemetry` feature
/// is enabled.
///
/// Returns `true` when this call installed the global subscriber,
/// `false` when the feature is off or a subscriber was already set by
/// the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
