//! The runtime orchestrator for the kitchen board.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::board::{self, BoardContext};
use crate::clients::BoardClient;
use crate::notify::{self, LogNotifier, Notifier};
use crate::store::{self, FileStore, OrderStore};

/// Command channel depth between clients and the board actor.
const BOARD_BUFFER: usize = 32;

/// Owns the running system: the board actor, the store writer, and the
/// notification dispatcher, each in its own Tokio task.
///
/// # Startup
/// [`KitchenSystem::new`] wires the collaborators and spawns everything.
/// The board seeds itself from the store before accepting its first
/// command; commands sent earlier simply queue on the channel.
///
/// # Shutdown
/// Dropping the client closes the command channel, which ends the actor
/// loop; the actor's exit in turn drops the save and ready senders, so the
/// writer and dispatcher drain their queues and stop. [`shutdown`] does
/// this explicitly and waits for all three, which also guarantees pending
/// saves and notifications have been flushed.
///
/// [`shutdown`]: KitchenSystem::shutdown
pub struct KitchenSystem {
    /// Client for sending commands and queries to the board.
    pub board_client: BoardClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KitchenSystem {
    /// Starts the system with explicit collaborators.
    pub fn new(store: Arc<dyn OrderStore>, notifier: Arc<dyn Notifier>) -> Self {
        let (save_tx, save_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = mpsc::unbounded_channel();

        let (actor, board_client) = board::new(BOARD_BUFFER);

        let writer_handle = store::spawn_writer(store.clone(), save_rx);
        let dispatcher_handle = notify::spawn_dispatcher(notifier, ready_rx);
        let board_handle = tokio::spawn(actor.run(BoardContext {
            store,
            save_tx,
            ready_tx,
        }));

        Self {
            board_client,
            handles: vec![board_handle, writer_handle, dispatcher_handle],
        }
    }

    /// Starts the system with the default wiring: a [`FileStore`] at the
    /// default path and a [`LogNotifier`].
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(FileStore::default()), Arc::new(LogNotifier))
    }

    /// Gracefully shuts down the system, flushing pending saves and
    /// notifications.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the command channel starts the cascade described above.
        drop(self.board_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(format!("Task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
