//! # Asset Cache
//!
//! Store-backed response cache for served assets. Response bodies live in an
//! external key-value store, keyed by request path, and expire via a TTL
//! handed straight to the store.
//!
//! ## Features
//!
//! - 💾 **TTL caching**: every entry carries its own expiry, applied by the store
//! - 🔑 **Pluggable policies**: key derivation, expiration, and skip predicates per (path, request)
//! - 🔌 **Lifecycle aware**: silently drops operations while the store is unreachable
//! - 🔄 **Async/Await**: built on Tokio, one shared store client across all calls
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asset_cache::{AssetCache, CacheConfig, Response};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Cache bodies for 60 seconds, keys prefixed per deployment
//!     let config = CacheConfig::new("http://localhost:15500")
//!         .with_expiration(60)
//!         .with_cache_key(|path, _| format!("app:{path}"));
//!     let cache = AssetCache::new(config)?;
//!
//!     cache.put("/index.html", "<html>...</html>", Some(&Response::new(200))).await?;
//!     let body = cache.fetch("/index.html", None).await?;
//!     println!("Body: {:?}", body);
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
mod monitor;
pub mod types;

#[cfg(test)]
mod tests;

pub use cache::AssetCache;
pub use client::StoreClient;
pub use config::{CacheConfig, DEFAULT_EXPIRATION_SECS, Expiration, StoreConfig};
pub use error::{CacheError, Result};
pub use logger::{LogSink, TracingSink};
pub use types::{Request, Response};
