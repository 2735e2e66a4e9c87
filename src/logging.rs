// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the stderr subscriber. `RUST_LOG` overrides the default filter;
/// `verbose` raises the crate's own level to debug.
pub fn init(verbose: bool) {
    let default = if verbose {
        "warn,spendboard=debug"
    } else {
        "warn,spendboard=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // try_init: tests may install a subscriber first
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();

    tracing::debug!("Tracing initialized");
}
