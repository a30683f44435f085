//! Error type for talking to the board actor.

use thiserror::Error;

/// Errors that can occur while communicating with the board.
///
/// Domain commands themselves never fail: unknown ids are no-ops and invalid
/// draft input is normalized. The only failures a caller can see are
/// channel-level, when the actor has shut down.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    /// The board actor's request channel is closed.
    #[error("Board actor closed")]
    ActorClosed,

    /// The board actor dropped the response channel.
    #[error("Board actor dropped response channel")]
    ActorDropped,
}
