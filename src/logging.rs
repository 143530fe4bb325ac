//! Diagnostic logging
//!
//! Log output goes to stderr so it never mixes with command output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter; `RUST_LOG` is read when unset
pub const LOG_ENV: &str = "KAKEIBO_LOG";

const DEFAULT_FILTER: &str = "kakeibo=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber once
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber installed by an embedding program wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
