use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,client=warn";

/// Install the global `fmt` subscriber. `RUST_LOG` overrides the default
/// filter. Later calls are no-ops.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_target(false)
            .try_init();
    });
}

/// Like [`init`], but output is captured by the test harness.
pub fn init_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_test_writer()
            .try_init();
    });
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
