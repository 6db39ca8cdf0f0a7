// SPDX-License-Identifier: MPL-2.0
//! Logger setup.
//!
//! Log output goes to stderr through a `tracing-subscriber` fmt layer. The
//! filter comes from `RUST_LOG` when set, otherwise from the requested level
//! (`--log-level`, then the `[logging]` config section), defaulting to `info`.

use crate::error::{Error, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Picks the filter directive: environment first, then `level`, then the default.
fn select_directive(env: Option<String>, level: Option<&str>) -> String {
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| level.map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_owned())
}

/// Builds the filter for `level`, honoring `RUST_LOG`.
///
/// # Errors
///
/// Returns [`Error::Logging`] when the selected directive cannot be parsed.
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    let directive = select_directive(std::env::var(EnvFilter::DEFAULT_ENV).ok(), level);
    EnvFilter::try_new(&directive)
        .map_err(|err| Error::Logging(format!("invalid filter '{directive}': {err}")))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails on an invalid filter or when a global subscriber is already set.
pub fn init(level: Option<&str>) -> Result<()> {
    let filter = build_filter(level)?;
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))
}
