//! Tracing configuration for the widlgen binary.
//!
//! The subscriber is only initialised when `WIDLGEN_LOG` (or `RUST_LOG`)
//! is set, so there is zero overhead in normal runs. `WIDLGEN_LOG` takes
//! precedence when both are set; values use the usual `RUST_LOG` syntax
//! (e.g. `debug`, `widlgen_core::merge=trace`).
//!
//! All output goes to stderr so it never interferes with the generated
//! externs on stdout.

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
pub fn init_tracing() {
    let has_widlgen_log = std::env::var("WIDLGEN_LOG").is_ok();
    if !has_widlgen_log && std::env::var("RUST_LOG").is_err() {
        return;
    }

    let filter = if let Ok(val) = std::env::var("WIDLGEN_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
