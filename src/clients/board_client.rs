//! The boundary the presentation layer programs against.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::board::{BoardError, BoardRequest};
use crate::engine::{Projection, SortMode};
use crate::model::OrderDraft;

/// A cloneable handle for sending commands and queries to the board actor.
///
/// Commands run to completion in arrival order; a returned `Ok(())` means
/// the state change has committed (though its notification and save are
/// delivered asynchronously afterwards).
#[derive(Clone)]
pub struct BoardClient {
    sender: mpsc::Sender<BoardRequest>,
}

impl BoardClient {
    pub fn new(sender: mpsc::Sender<BoardRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> BoardRequest,
    ) -> Result<T, BoardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| BoardError::ActorClosed)?;
        response.await.map_err(|_| BoardError::ActorDropped)
    }

    /// Advances one order to its next stage. Unknown ids and already-ready
    /// orders are silent no-ops.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: impl Into<String> + std::fmt::Debug) -> Result<(), BoardError> {
        debug!("Sending advance");
        self.request(|respond_to| BoardRequest::Advance {
            id: id.into(),
            respond_to,
        })
        .await
    }

    /// Moves every queued order to in-progress.
    #[instrument(skip(self))]
    pub async fn start_all_queued(&self) -> Result<(), BoardError> {
        debug!("Sending start_all_queued");
        self.request(|respond_to| BoardRequest::StartAllQueued { respond_to })
            .await
    }

    /// Moves every in-progress order to ready, scheduling one notification
    /// per readied order.
    #[instrument(skip(self))]
    pub async fn complete_all_in_progress(&self) -> Result<(), BoardError> {
        debug!("Sending complete_all_in_progress");
        self.request(|respond_to| BoardRequest::CompleteAllInProgress { respond_to })
            .await
    }

    /// Creates a new queued order from the draft and returns its fresh id.
    /// Never fails on draft content; invalid fields are normalized.
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: OrderDraft) -> Result<String, BoardError> {
        debug!("Sending create");
        self.request(|respond_to| BoardRequest::Create { draft, respond_to })
            .await
    }

    /// Read-only query: the grouped, sorted view of the current collection.
    #[instrument(skip(self))]
    pub async fn projection(&self, sort: SortMode) -> Result<Projection, BoardError> {
        debug!("Sending projection query");
        self.request(|respond_to| BoardRequest::Projection { sort, respond_to })
            .await
    }
}
