//! Telemetry helpers for applications embedding `chartplan`.
//!
//! The planner emits `tracing` events on its own (a warning per
//! unknown-metric fallback, a debug event per resolved plan) but never
//! installs a subscriber; dashboards embedding the engine usually have one
//! already. For hosts that do not, `init_default_tracing` wires a sensible
//! default, kept explicit and opt-in behind the `telemetry` feature.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
