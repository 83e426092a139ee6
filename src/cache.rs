//! The cache adapter
//!
//! Translates (path, request, response, body) tuples into store operations,
//! applying the configured key-derivation, expiration, and skip policies.

use crate::client::StoreClient;
use crate::config::{CacheConfig, ExpirationFn, KeyFn, SkipFn};
use crate::error::{CacheError, Result};
use crate::logger::{SharedLogSink, TracingSink};
use crate::monitor::{self, MonitorHandle};
use crate::types::{Request, Response};
use std::sync::Arc;

/// Response cache backed by an external key-value store
///
/// Keys are derived from request paths, entries expire via a TTL handed to
/// the store. While the store connection is down, `fetch` and `put` are
/// silent no-ops; dropped operations are never queued or replayed.
///
/// # Example
/// ```no_run
/// use asset_cache::{AssetCache, CacheConfig, Response};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let cache = AssetCache::new(CacheConfig::new("http://localhost:15500"))?;
///
///     cache.put("/index.html", "<html>...</html>", Some(&Response::new(200))).await?;
///     let body = cache.fetch("/index.html", None).await?;
///     println!("cached body: {:?}", body);
///
///     Ok(())
/// }
/// ```
pub struct AssetCache {
    store: StoreClient,
    key_fn: KeyFn,
    expiration_fn: ExpirationFn,
    skip_fn: SkipFn,
    _monitor: Option<MonitorHandle>,
}

impl AssetCache {
    /// Create a cache adapter with the default `tracing`-backed log sink
    ///
    /// Opens the store connection asynchronously; construction fails only on
    /// invalid connection parameters. Connection failures surface through
    /// logged error lines and [`AssetCache::is_connected`] staying false.
    pub fn new(config: CacheConfig) -> Result<Self> {
        Self::with_logger(config, Arc::new(TracingSink))
    }

    /// Create a cache adapter with an injected log sink
    pub fn with_logger(config: CacheConfig, logger: SharedLogSink) -> Result<Self> {
        let store = StoreClient::new(config.store.clone(), logger)?;
        let monitor = monitor::spawn(&store);
        Ok(Self::assemble(config, store, Some(monitor)))
    }

    fn assemble(config: CacheConfig, store: StoreClient, monitor: Option<MonitorHandle>) -> Self {
        Self {
            store,
            key_fn: config.key_fn(),
            expiration_fn: config.expiration_fn(),
            skip_fn: config.skip_fn(),
            _monitor: monitor,
        }
    }

    /// Whether the store connection is currently established
    pub fn is_connected(&self) -> bool {
        self.store.is_connected()
    }

    /// Look up the cached body for a path
    ///
    /// Returns `Ok(None)` when the adapter is disconnected or the key is
    /// absent from the store. Fails with [`CacheError::Skipped`] when the
    /// configured skip predicate declines the lookup; the store is not
    /// contacted in that case. Read-only: never mutates store entries.
    pub async fn fetch(&self, path: &str, request: Option<&Request>) -> Result<Option<String>> {
        if !self.store.is_connected() {
            return Ok(None);
        }

        let path = normalize_path(path);

        if (self.skip_fn)(&path, request) {
            return Err(CacheError::Skipped(path));
        }

        let key = (self.key_fn)(&path, request);
        self.store.get(&key).await
    }

    /// Store a response body under a path
    ///
    /// No-op while disconnected, and a deliberate no-op for responses with a
    /// status code of 300 or above; both resolve `Ok(())` without a store
    /// write. Otherwise writes the body together with its TTL in a single
    /// store command.
    pub async fn put(&self, path: &str, body: &str, response: Option<&Response>) -> Result<()> {
        if !self.store.is_connected() {
            return Ok(());
        }

        let path = normalize_path(path);
        let request = response.and_then(|r| r.req.as_ref());

        if let Some(response) = response {
            if response.status >= 300 {
                return Ok(());
            }
        }

        let key = (self.key_fn)(&path, request);
        let ttl = (self.expiration_fn)(&path, request);
        self.store.set_ex(&key, body, ttl).await
    }

    #[cfg(test)]
    pub(crate) fn without_monitor(config: CacheConfig, logger: SharedLogSink) -> Result<Self> {
        let store = StoreClient::new(config.store.clone(), logger)?;
        Ok(Self::assemble(config, store, None))
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &StoreClient {
        &self.store
    }
}

/// Normalize a request path to exactly one trailing slash
///
/// Key derivation and comparison always operate on this form.
fn normalize_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_appends_trailing_slash() {
        assert_eq!(normalize_path("/a"), "/a/");
        assert_eq!(normalize_path("/nested/path"), "/nested/path/");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        assert_eq!(normalize_path("/a/"), "/a/");
        assert_eq!(normalize_path(&normalize_path("/a")), "/a/");
    }

    #[test]
    fn test_normalize_empty_path() {
        assert_eq!(normalize_path(""), "/");
    }
}
