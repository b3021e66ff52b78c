pub mod build_info;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "fintrack_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` wins over `extra_filter`, which in turn wins over the crate default.
pub fn init_tracing(extra_filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(extra_filter.unwrap_or(DEFAULT_DIRECTIVE)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A host application may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
