//! Telemetry helpers for applications embedding `plotcore`.
//!
//! Tracing setup stays explicit and opt-in. Consumers either call
//! `init_default_tracing` or install their own `tracing` subscriber
//! and filters before touching the engine.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when this call installed the subscriber.
/// Returns `false` when the feature is disabled or the host application
/// already set a global subscriber.
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
