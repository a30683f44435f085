//! # Kitchen Order Board
//!
//! An engine for tracking food orders through a forward-only kitchen
//! lifecycle: **queued → in progress → ready**. It groups orders for
//! display, persists the collection best-effort across sessions, and
//! notifies staff exactly once when an order becomes ready.
//!
//! Rendering is someone else's job: a presentation layer consumes the
//! projection this crate produces and forwards user intents back through
//! [`clients::BoardClient`].
//!
//! ## Architecture
//!
//! The whole order collection is owned by a single actor task, so commands
//! execute sequentially against a consistent snapshot with no locks.
//! Transitions themselves are pure functions; the actor just commits their
//! results and schedules the side effects afterwards.
//!
//! - [`model`] — the [`Order`](model::Order) entity and its value types.
//! - [`engine`] — pure transition logic and the view projector.
//! - [`board`] — the actor owning the collection; processes
//!   [`BoardRequest`](board::BoardRequest)s from a channel.
//! - [`clients`] — [`BoardClient`](clients::BoardClient), the typed async
//!   facade the presentation layer calls.
//! - [`store`] — the persistence boundary
//!   ([`OrderStore`](store::OrderStore)) with file and in-memory backends.
//! - [`notify`] — the [`Notifier`](notify::Notifier) boundary and the
//!   dispatch task that delivers ready alerts after each commit.
//! - [`lifecycle`] — [`KitchenSystem`](lifecycle::KitchenSystem), which
//!   wires and supervises the tasks, plus tracing setup.
//!
//! ## Guarantees
//!
//! - Status only ever moves forward; advancing a ready order is a no-op.
//! - Every id that enters ready produces exactly one notification, in
//!   transition order, delivered only after the new state is committed.
//! - Storage is advisory: a failed load falls back to the built-in seed, a
//!   failed save is logged and swallowed, and the in-memory collection
//!   stays authoritative for the session.
//!
//! ## Quick Start
//!
//! ```ignore
//! let system = KitchenSystem::with_defaults();
//! let id = system.board_client.create(draft).await?;
//! system.board_client.advance(id).await?;
//! let view = system.board_client.projection(SortMode::Eta).await?;
//! system.shutdown().await?;
//! ```

pub mod board;
pub mod clients;
pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod store;
