//! Shared setup for the store and session tests.

use appnames_core::AliasStore;
use appnames_storage::MemoryBackend;
use log::LevelFilter;

pub fn init_test_logging() {
    //   Logs will appear only when you run with `-- --nocapture`
    //   or when the test fails.
    let _ = env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A store over an empty in-memory backend.
pub fn memory_store() -> AliasStore<MemoryBackend> {
    init_test_logging();
    AliasStore::new(MemoryBackend::new())
}

/// A store whose slot already holds `raw`, as if written by an earlier run.
pub fn seeded_store(raw: &str) -> AliasStore<MemoryBackend> {
    init_test_logging();
    AliasStore::new(MemoryBackend::new().with_slot("custom_names", raw))
}
