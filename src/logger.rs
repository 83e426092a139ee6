//! Log sink seam
//!
//! The host tool owns the diagnostic output channel, so the cache takes an
//! explicit sink instead of writing anywhere ambient. The default sink
//! forwards to `tracing`.

use std::sync::Arc;

/// Single-capability logging sink: one human-readable line per event.
pub trait LogSink: Send + Sync {
    /// Write one diagnostic line.
    fn write_line(&self, line: &str);
}

/// Default sink forwarding each line to `tracing` at INFO level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "asset_cache", "{line}");
    }
}

/// Shared handle to a log sink.
pub type SharedLogSink = Arc<dyn LogSink>;
