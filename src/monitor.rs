//! Store connection lifecycle monitor
//!
//! Holds a websocket to the store's event endpoint and drives the adapter's
//! connected flag from it: socket established means connected, stream end
//! means disconnected, a transport error alone changes nothing. The monitor
//! keeps reconnecting after a fixed delay for the adapter's entire lifetime.

use crate::client::StoreClient;
use futures_util::StreamExt;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;

const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// Handle for stopping the lifecycle monitor
///
/// The adapter holds it for its entire lifetime; the monitor stops when the
/// adapter is dropped.
pub(crate) struct MonitorHandle {
    cancel_tx: mpsc::UnboundedSender<()>,
}

impl MonitorHandle {
    /// Stop the monitor task
    pub(crate) fn stop(self) {
        let _ = self.cancel_tx.send(());
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        // Automatically stop when the handle is dropped
        // Note: send() fails if the task already exited, which is fine
        let _ = self.cancel_tx.send(());
    }
}

/// Spawn the lifecycle monitor for a store client
pub(crate) fn spawn(client: &StoreClient) -> MonitorHandle {
    let connected = client.connected_flag();
    let logger = client.logger();
    let base_url = client.base_url().clone();

    let (cancel_tx, mut cancel_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let ws_url = match base_url.scheme() {
            "http" => format!("ws://{}", base_url.authority()),
            "https" => format!("wss://{}", base_url.authority()),
            other => {
                tracing::error!("Unsupported URL scheme: {}", other);
                return;
            }
        };
        let ws_endpoint = format!("{}/events/ws", ws_url);

        loop {
            tracing::debug!("Connecting to store events: {}", ws_endpoint);

            let ws_stream = tokio::select! {
                _ = cancel_rx.recv() => return,
                result = connect_async(&ws_endpoint) => match result {
                    Ok((stream, _)) => stream,
                    Err(e) => {
                        logger.write_line(&format!("store error; err={e}"));
                        tokio::select! {
                            _ = cancel_rx.recv() => return,
                            _ = tokio::time::sleep(RECONNECT_DELAY) => continue,
                        }
                    }
                },
            };

            connected.store(true, Ordering::SeqCst);
            logger.write_line("store connected");

            let (_write, mut read) = ws_stream.split();

            loop {
                tokio::select! {
                    _ = cancel_rx.recv() => return,
                    msg = read.next() => match msg {
                        // Heartbeat and event frames keep the socket alive;
                        // their contents are not interpreted here.
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            logger.write_line(&format!("store error; err={e}"));
                        }
                        None => {
                            connected.store(false, Ordering::SeqCst);
                            logger.write_line("store disconnected");
                            break;
                        }
                    },
                }
            }

            tokio::select! {
                _ = cancel_rx.recv() => return,
                _ = tokio::time::sleep(RECONNECT_DELAY) => {}
            }
        }
    });

    MonitorHandle { cancel_tx }
}
