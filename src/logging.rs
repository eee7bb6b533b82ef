// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tracing subscriber setup for embedders

use tracing_subscriber::EnvFilter;

use crate::error::{FormFactorError, Result};

/// Targets raised to `debug` when verbose output is requested
pub const DEBUG_TARGETS: [&str; 2] = ["formfactor.classifier=debug", "formfactor.signals=debug"];

/// Build the filter: `RUST_LOG` first, WARN by default, plus the crate's
/// targets at debug when `verbose > 0`.
pub fn env_filter(verbose: u8) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    if verbose > 0 {
        for directive in DEBUG_TARGETS {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }

    filter
}

/// Install a global fmt subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init(verbose: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .try_init()
        .map_err(|e| FormFactorError::Logging(e.to_string()))
}
