//! Common test utilities for filter integration tests.

use furigana_core::{EngineConfig, ReadingEngine};

/// Install a test subscriber once. Honours RUST_LOG, defaults to off.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_test_writer()
        .try_init();
}

/// Engines for both markup styles, ruby first.
pub fn engines() -> [ReadingEngine; 2] {
    init_tracing();
    [
        ReadingEngine::new(EngineConfig {
            use_rich_ruby_markup: true,
        }),
        ReadingEngine::new(EngineConfig {
            use_rich_ruby_markup: false,
        }),
    ]
}
