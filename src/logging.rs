// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter comes from `--log` when given, otherwise from `RUST_LOG`,
//! otherwise [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the env filter for the given CLI directive.
#[must_use]
pub fn filter(cli_directive: Option<&str>) -> EnvFilter {
    if let Some(directive) = cli_directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("ignoring invalid --log filter {directive:?}: {err}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(cli_directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(cli_directive))
        .with_target(false)
        .try_init();
}
