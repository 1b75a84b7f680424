//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "MUTANT_LOG";

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Reads `MUTANT_LOG` for per-crate log levels, e.g.
/// `MUTANT_LOG=mutant_service=debug,mutant_storage=warn`.
/// Falls back to `info` if unset or invalid. Idempotent, and a no-op
/// when another global subscriber is already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
