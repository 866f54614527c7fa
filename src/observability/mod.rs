//! Tracing initialization.
//!
//! This module configures the tracing subscriber for the binary: a fmt layer
//! writing to stderr, filtered by the configured level with `RUST_LOG` taking
//! precedence. The library itself only emits spans and events through the
//! `tracing` macros and never installs a subscriber, so embedders keep
//! control of their own pipeline.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// The level comes from `RUST_LOG` if set, otherwise from `level`, defaulting
/// to `warn` so interactive output stays clean. Idempotent: only the first
/// call installs a subscriber.
pub fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("warn")));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
