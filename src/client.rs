//! Store client implementation

use crate::config::StoreConfig;
use crate::error::{CacheError, Result};
use crate::logger::SharedLogSink;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use url::Url;

/// Client for the key-value store backing the cache
///
/// Owns the HTTP transport and the connection-state flag. Commands use the
/// store's envelope format:
/// ```json
/// {
///   "command": "kv.get",
///   "request_id": "uuid",
///   "payload": { ... }
/// }
/// ```
#[derive(Clone)]
pub struct StoreClient {
    config: Arc<StoreConfig>,
    http_client: reqwest::Client,
    base_url: Url,
    connected: Arc<AtomicBool>,
    logger: SharedLogSink,
}

impl StoreClient {
    /// Create a new store client
    ///
    /// Fails only on invalid connection parameters; the connection itself is
    /// established asynchronously by the lifecycle monitor.
    pub fn new(config: StoreConfig, logger: SharedLogSink) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let mut http_client_builder = reqwest::Client::builder().timeout(config.timeout);

        if let Some(ref token) = config.auth_token {
            let mut headers = reqwest::header::HeaderMap::new();
            if let Ok(value) = format!("Bearer {}", token).parse() {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
            http_client_builder = http_client_builder.default_headers(headers);
        }

        let http_client = http_client_builder.build()?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
            base_url,
            connected: Arc::new(AtomicBool::new(false)),
            logger,
        })
    }

    /// Whether the store connection is currently established
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Get a value by key
    ///
    /// Returns `None` when the key is missing or expired; the store reports
    /// absence as a null payload, not an error.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let payload = serde_json::json!({"key": key});
        let response = self.send_command("kv.get", payload).await?;

        if response.is_null() {
            return Ok(None);
        }

        let value: String = serde_json::from_value(response)?;
        Ok(Some(value))
    }

    /// Set a key to a value with an expiry, in one command
    ///
    /// Value and TTL travel together, so the store applies both or neither.
    pub async fn set_ex(&self, key: &str, value: &str, ttl: u64) -> Result<()> {
        let payload = serde_json::json!({
            "key": key,
            "value": value,
            "ttl": ttl,
        });

        self.send_command("kv.setex", payload).await?;
        Ok(())
    }

    /// Send a command to the store's command endpoint
    async fn send_command(&self, command: &str, payload: Value) -> Result<Value> {
        let request_id = uuid::Uuid::new_v4().to_string();

        let body = serde_json::json!({
            "command": command,
            "request_id": request_id,
            "payload": payload,
        });

        let url = self.base_url.join("api/v1/command")?;

        let response = self.http_client.post(url).json(&body).send().await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CacheError::Store(error_text));
        }

        let result: Value = response.json().await?;

        if !result["success"].as_bool().unwrap_or(false) {
            let error_msg = result["error"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string();
            return Err(CacheError::Store(error_msg));
        }

        Ok(result["payload"].clone())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn connected_flag(&self) -> Arc<AtomicBool> {
        self.connected.clone()
    }

    pub(crate) fn logger(&self) -> SharedLogSink {
        self.logger.clone()
    }

    pub(crate) fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub(crate) fn store_config(&self) -> &StoreConfig {
        &self.config
    }
}
