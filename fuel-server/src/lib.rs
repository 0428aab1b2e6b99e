//! Fuel station registry server.
//!
//! Keeps the live state of a network of fuel stations (tank levels,
//! capacities, prices) in memory, answers queries against it and applies
//! region-wide price changes, behind a small JSON API and HTML dashboard.

pub mod config;
pub mod domain;
pub mod registry;
pub mod web;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing/logging.
///
/// Honours `RUST_LOG`, defaulting to `info`. Call once, at startup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
