//! Tracing bootstrap for hosts that do not wire their own subscriber.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, falling
/// back to `directive` when the environment sets nothing.
///
/// Returns `false` when the `telemetry` feature is disabled or another
/// subscriber is already installed.
#[must_use]
pub fn init_tracing(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
