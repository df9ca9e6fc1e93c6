//! Telemetry helpers for applications embedding `heatmap-rs`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! `init_default_tracing` or wire their own subscriber and filters.

/// Default env-filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Same as [`init_default_tracing`] but with an explicit fallback directive,
/// e.g. `"heatmap_rs=debug"`.
#[must_use]
pub fn init_tracing_with_directive(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
