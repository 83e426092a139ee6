//! Store and cache configuration

use crate::types::Request;
use std::sync::Arc;
use std::time::Duration;

/// Default entry lifetime when no `expiration` option is given.
pub const DEFAULT_EXPIRATION_SECS: u64 = 300;

/// Key derivation policy: maps a normalized path (and the optional
/// originating request) to a store key.
pub type KeyFn = Arc<dyn Fn(&str, Option<&Request>) -> String + Send + Sync>;

/// Expiration policy: maps a normalized path (and the optional originating
/// request) to a TTL in seconds.
pub type ExpirationFn = Arc<dyn Fn(&str, Option<&Request>) -> u64 + Send + Sync>;

/// Skip policy: decides whether a fetch should bypass the cache entirely.
pub type SkipFn = Arc<dyn Fn(&str, Option<&Request>) -> bool + Send + Sync>;

/// Store connection configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store server
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional authentication token
    pub auth_token: Option<String>,
}

impl StoreConfig {
    /// Create a new configuration with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            auth_token: None,
        }
    }

    /// Set the timeout for store requests
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the authentication token
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// Expiration option: a fixed duration or a per-request function.
#[derive(Clone)]
pub enum Expiration {
    /// Fixed TTL in seconds for every entry.
    Fixed(u64),
    /// TTL derived per (path, request).
    PerRequest(ExpirationFn),
}

/// Cache policy configuration
///
/// Parsed read-only into the adapter at construction; the caller's value is
/// never mutated. Each function-or-constant option resolves once into a
/// uniform `(path, request) -> T` callable.
#[derive(Clone)]
pub struct CacheConfig {
    /// Store connection parameters, passed through to the store client.
    pub store: StoreConfig,
    pub(crate) expiration: Option<Expiration>,
    pub(crate) cache_key: Option<KeyFn>,
    pub(crate) skip_cache: Option<SkipFn>,
}

impl CacheConfig {
    /// Create a cache configuration for a store at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_store(StoreConfig::new(base_url))
    }

    /// Create a cache configuration over an existing store configuration
    pub fn with_store(store: StoreConfig) -> Self {
        Self {
            store,
            expiration: None,
            cache_key: None,
            skip_cache: None,
        }
    }

    /// Set a fixed TTL in seconds for every cached entry
    pub fn with_expiration(mut self, seconds: u64) -> Self {
        self.expiration = Some(Expiration::Fixed(seconds));
        self
    }

    /// Set a per-request TTL function
    pub fn with_expiration_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&Request>) -> u64 + Send + Sync + 'static,
    {
        self.expiration = Some(Expiration::PerRequest(Arc::new(f)));
        self
    }

    /// Set the key derivation function (default: identity on the normalized path)
    pub fn with_cache_key<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&Request>) -> String + Send + Sync + 'static,
    {
        self.cache_key = Some(Arc::new(f));
        self
    }

    /// Set the skip predicate (default: never skip)
    pub fn with_skip_cache<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&Request>) -> bool + Send + Sync + 'static,
    {
        self.skip_cache = Some(Arc::new(f));
        self
    }

    /// Resolve the expiration option into a uniform callable
    pub(crate) fn expiration_fn(&self) -> ExpirationFn {
        match &self.expiration {
            Some(Expiration::Fixed(secs)) => {
                let secs = *secs;
                Arc::new(move |_, _| secs)
            }
            Some(Expiration::PerRequest(f)) => f.clone(),
            None => Arc::new(|_, _| DEFAULT_EXPIRATION_SECS),
        }
    }

    /// Resolve the key option into a uniform callable
    pub(crate) fn key_fn(&self) -> KeyFn {
        match &self.cache_key {
            Some(f) => f.clone(),
            None => Arc::new(|path, _| path.to_string()),
        }
    }

    /// Resolve the skip option into a uniform callable
    pub(crate) fn skip_fn(&self) -> SkipFn {
        match &self.skip_cache {
            Some(f) => f.clone(),
            None => Arc::new(|_, _| false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_creation() {
        let config = StoreConfig::new("http://localhost:15500");
        assert_eq!(config.base_url, "http://localhost:15500");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_store_config_builder() {
        let config = StoreConfig::new("http://localhost:15500")
            .with_timeout(Duration::from_secs(10))
            .with_auth_token("test-token");

        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.auth_token, Some("test-token".to_string()));
    }

    #[test]
    fn test_default_expiration_is_constant_300() {
        let config = CacheConfig::new("http://localhost:15500");
        let expiration = config.expiration_fn();
        assert_eq!(expiration("/a/", None), 300);
        assert_eq!(expiration("/anything/else/", None), 300);
    }

    #[test]
    fn test_fixed_expiration_resolves_to_constant() {
        let config = CacheConfig::new("http://localhost:15500").with_expiration(60);
        let expiration = config.expiration_fn();
        assert_eq!(expiration("/a/", None), 60);
    }

    #[test]
    fn test_per_request_expiration() {
        let config = CacheConfig::new("http://localhost:15500")
            .with_expiration_fn(|path, _| if path.starts_with("/assets/") { 3600 } else { 30 });
        let expiration = config.expiration_fn();
        assert_eq!(expiration("/assets/app.js/", None), 3600);
        assert_eq!(expiration("/index.html/", None), 30);
    }

    #[test]
    fn test_default_key_is_identity() {
        let config = CacheConfig::new("http://localhost:15500");
        let key = config.key_fn();
        assert_eq!(key("/a/", None), "/a/");
    }

    #[test]
    fn test_custom_key_fn() {
        let config = CacheConfig::new("http://localhost:15500")
            .with_cache_key(|path, _| format!("pfx:{path}"));
        let key = config.key_fn();
        assert_eq!(key("/x/", None), "pfx:/x/");
    }

    #[test]
    fn test_default_skip_is_never() {
        let config = CacheConfig::new("http://localhost:15500");
        let skip = config.skip_fn();
        assert!(!skip("/a/", None));
    }

    #[test]
    fn test_custom_skip_fn() {
        let config = CacheConfig::new("http://localhost:15500")
            .with_skip_cache(|path, _| path.starts_with("/admin/"));
        let skip = config.skip_fn();
        assert!(skip("/admin/users/", None));
        assert!(!skip("/public/", None));
    }

    #[test]
    fn test_config_clone() {
        let config = CacheConfig::new("http://localhost:15500").with_expiration(60);
        let config2 = config.clone();
        assert_eq!(config2.expiration_fn()("/a/", None), 60);
    }
}
