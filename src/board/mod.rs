//! # The Board Actor
//!
//! The "server" half of the engine. [`BoardActor`] exclusively owns the
//! order collection and processes [`BoardRequest`]s sequentially from a
//! channel, so no locks are needed and no reader ever sees a partially
//! updated collection. Each state-changing command runs to completion:
//! compute the new collection with the pure [`crate::engine`] functions,
//! commit it, queue a snapshot for the store writer, and queue readied ids
//! for the notification dispatcher.
//!
//! # Context Injection
//! External collaborators (store, writer channel, ready channel) are
//! injected into [`BoardActor::run`] rather than the constructor, so the
//! [`crate::lifecycle`] layer can create the actor first and wire
//! dependencies when it spawns everything.

pub mod error;

pub use error::*;

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::clients::BoardClient;
use crate::engine;
use crate::engine::{Projection, SortMode};
use crate::model::{self, Order, OrderDraft, MIN_ETA_MINUTES};
use crate::store::OrderStore;

/// One-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<T>;

/// Commands accepted by the board actor.
///
/// There is deliberately no delete or revert variant: the lifecycle is
/// forward-only and orders live for the life of the collection.
#[derive(Debug)]
pub enum BoardRequest {
    Advance {
        id: String,
        respond_to: Response<()>,
    },
    StartAllQueued {
        respond_to: Response<()>,
    },
    CompleteAllInProgress {
        respond_to: Response<()>,
    },
    Create {
        draft: OrderDraft,
        respond_to: Response<String>,
    },
    Projection {
        sort: SortMode,
        respond_to: Response<Projection>,
    },
}

/// Collaborators injected into the actor's event loop.
pub struct BoardContext {
    /// Read once at startup to seed the collection.
    pub store: Arc<dyn OrderStore>,
    /// Snapshots queued here are persisted by the store writer task.
    pub save_tx: mpsc::UnboundedSender<Vec<u8>>,
    /// Readied ids queued here are delivered by the notification dispatcher.
    pub ready_tx: mpsc::UnboundedSender<String>,
}

/// The actor owning the order collection.
pub struct BoardActor {
    receiver: mpsc::Receiver<BoardRequest>,
    orders: Vec<Order>,
    next_id: u64,
}

/// Creates a new board actor and its client.
pub fn new(buffer_size: usize) -> (BoardActor, BoardClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let actor = BoardActor {
        receiver,
        orders: Vec::new(),
        next_id: 1,
    };
    (actor, BoardClient::new(sender))
}

impl BoardActor {
    /// Runs the event loop until every client is dropped.
    ///
    /// Seeds the collection from the store first: absence, a load error, or
    /// undecodable bytes all degrade to the built-in default seed.
    pub async fn run(mut self, ctx: BoardContext) {
        self.orders = match ctx.store.load().await {
            Ok(Some(bytes)) => match decode(&bytes) {
                Some(orders) => orders,
                None => {
                    warn!("Persisted data malformed, falling back to default seed");
                    model::default_seed()
                }
            },
            Ok(None) => {
                info!("No persisted data, using default seed");
                model::default_seed()
            }
            Err(e) => {
                warn!(error = %e, "Load failed, falling back to default seed");
                model::default_seed()
            }
        };
        self.next_id = next_counter(&self.orders);
        info!(size = self.orders.len(), "Board started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BoardRequest::Advance { id, respond_to } => {
                    debug!(%id, "Advance");
                    let (orders, readied) = engine::advance(&self.orders, &id);
                    self.commit(orders, readied, &ctx);
                    let _ = respond_to.send(());
                }
                BoardRequest::StartAllQueued { respond_to } => {
                    debug!("StartAllQueued");
                    let orders = engine::start_all_queued(&self.orders);
                    self.commit(orders, Vec::new(), &ctx);
                    let _ = respond_to.send(());
                }
                BoardRequest::CompleteAllInProgress { respond_to } => {
                    debug!("CompleteAllInProgress");
                    let (orders, readied) = engine::complete_all_in_progress(&self.orders);
                    self.commit(orders, readied, &ctx);
                    let _ = respond_to.send(());
                }
                BoardRequest::Create { draft, respond_to } => {
                    debug!(?draft, "Create");
                    let id = self.fresh_id();
                    let orders = engine::create(&self.orders, id.as_str(), draft);
                    self.commit(orders, Vec::new(), &ctx);
                    info!(%id, size = self.orders.len(), "Created");
                    let _ = respond_to.send(id);
                }
                BoardRequest::Projection { sort, respond_to } => {
                    debug!(?sort, "Projection");
                    let _ = respond_to.send(engine::project(&self.orders, sort));
                }
            }
        }

        info!(size = self.orders.len(), "Board shutdown");
    }

    /// Replaces the collection, then queues the snapshot save and the ready
    /// notifications. The commit happens strictly before either hand-off.
    fn commit(&mut self, orders: Vec<Order>, readied: Vec<String>, ctx: &BoardContext) {
        self.orders = orders;
        match serde_json::to_vec(&self.orders) {
            Ok(bytes) => {
                // Writer task may already be gone during shutdown.
                let _ = ctx.save_tx.send(bytes);
            }
            Err(e) => warn!(error = %e, "Snapshot encoding failed"),
        }
        for id in readied {
            info!(%id, "Order entered Ready, scheduling notification");
            let _ = ctx.ready_tx.send(id);
        }
    }

    /// Next unique id. The monotonic counter never collides with generated
    /// ids; the scan guards against persisted ids outside the pattern.
    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("order_{}", self.next_id);
            self.next_id += 1;
            if !self.orders.iter().any(|o| o.id == candidate) {
                return candidate;
            }
        }
    }
}

/// Decodes persisted bytes into a collection, rejecting anything that
/// violates the invariants (duplicate ids, zero ETA).
fn decode(bytes: &[u8]) -> Option<Vec<Order>> {
    let orders: Vec<Order> = serde_json::from_slice(bytes).ok()?;
    for (i, order) in orders.iter().enumerate() {
        if order.eta_minutes < MIN_ETA_MINUTES {
            return None;
        }
        if orders.iter().skip(i + 1).any(|o| o.id == order.id) {
            return None;
        }
    }
    Some(orders)
}

/// Seeds the id counter past the highest `order_{n}` suffix already in use.
fn next_counter(orders: &[Order]) -> u64 {
    orders
        .iter()
        .filter_map(|o| o.id.strip_prefix("order_").and_then(|s| s.parse::<u64>().ok()))
        .max()
        .unwrap_or(0)
        + 1
}
