//! # Ready Notifications
//!
//! When an order enters `Ready` the kitchen staff get exactly one alert for
//! it. The board never calls the [`Notifier`] directly from inside a command:
//! it pushes the readied ids onto a FIFO channel *after* the new collection
//! has replaced the old one, and the dispatcher task spawned by
//! [`spawn_dispatcher`] delivers them. That ordering guarantee is what makes
//! the hand-off race-free: by the time `notify` runs, the status change is
//! already visible to every reader.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// User-facing alert sink for orders that just became ready.
///
/// Implementations stand in for the visual banner and audio cue; the engine
/// only decides *when* they fire. `notify` has no return value the engine
/// observes — delivery is schedule-and-forget.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, order_id: &str);
}

/// Spawns the dispatch task that drains readied ids into the notifier.
///
/// Ids are delivered one at a time in the order they transitioned, including
/// each id of a batch completion individually. The task ends when the board
/// drops its sender, after draining what is still queued.
pub fn spawn_dispatcher(
    notifier: Arc<dyn Notifier>,
    mut rx: mpsc::UnboundedReceiver<String>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(order_id) = rx.recv().await {
            debug!(%order_id, "Dispatching ready notification");
            notifier.notify(&order_id).await;
        }
        debug!("Notification dispatcher shutdown");
    })
}

/// Default notifier: a structured log line per ready order.
#[derive(Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, order_id: &str) {
        info!(%order_id, "Order ready for pickup");
    }
}

/// Test double that records every notification and forwards it on a channel
/// so tests can await deliveries deterministically.
pub struct RecordingNotifier {
    seen: Mutex<Vec<String>>,
    tx: mpsc::UnboundedSender<String>,
}

impl RecordingNotifier {
    /// Returns the notifier and the receiving end of its delivery channel.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
                tx,
            }),
            rx,
        )
    }

    /// Every id notified so far, in delivery order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, order_id: &str) {
        self.seen.lock().unwrap().push(order_id.to_string());
        // Receiver may be gone if the test only asserts via seen().
        let _ = self.tx.send(order_id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dispatcher_preserves_transition_order() {
        let (notifier, mut delivered) = RecordingNotifier::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = spawn_dispatcher(notifier.clone(), rx);

        tx.send("order_2".to_string()).unwrap();
        tx.send("order_1".to_string()).unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(delivered.recv().await.as_deref(), Some("order_2"));
        assert_eq!(delivered.recv().await.as_deref(), Some("order_1"));
        assert_eq!(notifier.seen(), ["order_2", "order_1"]);
    }
}
