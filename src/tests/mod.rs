//! Test utilities and mocks

use mockito::{Server, ServerGuard};

/// Install the test tracing subscriber, once per process
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Create a mock store server for testing
pub async fn create_mock_server() -> ServerGuard {
    init_tracing();
    Server::new_async().await
}

/// Common test utilities
pub mod helpers {
    use super::*;
    use crate::logger::test_sink::MemorySink;
    use crate::{AssetCache, CacheConfig};
    use std::sync::Arc;

    /// Setup a connected cache adapter pointing to a mock store
    ///
    /// The lifecycle monitor is not spawned; the connected flag is forced so
    /// tests exercise the command path deterministically.
    pub async fn setup_test_cache(config_for: impl FnOnce(CacheConfig) -> CacheConfig)
    -> (AssetCache, ServerGuard, Arc<MemorySink>) {
        let server = create_mock_server().await;
        let sink = Arc::new(MemorySink::default());
        let config = config_for(CacheConfig::new(server.url()));
        let cache = AssetCache::without_monitor(config, sink.clone()).unwrap();
        cache.store().set_connected(true);
        (cache, server, sink)
    }

    /// Setup a cache adapter whose store connection is down
    pub async fn setup_disconnected_cache() -> (AssetCache, ServerGuard) {
        let server = create_mock_server().await;
        let sink = Arc::new(MemorySink::default());
        let config = CacheConfig::new(server.url());
        let cache = AssetCache::without_monitor(config, sink).unwrap();
        (cache, server)
    }
}
