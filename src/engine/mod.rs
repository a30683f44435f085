//! # Lifecycle Engine
//!
//! Pure transition logic for the order collection.
//!
//! Every function in this module maps `(current collection, command)` to a
//! new collection, plus the set of ids that entered `Ready` where a command
//! can produce one. Nothing here touches channels, storage, or clocks; the
//! [`crate::board`] actor is responsible for committing the result, saving
//! it, and scheduling notifications for the readied ids.
//!
//! Keeping the transitions pure is what makes deferred notification safe:
//! by the time the readied ids are handed to the dispatcher, the new
//! collection has already replaced the old one.

pub mod projector;
pub mod transitions;

pub use projector::*;
pub use transitions::*;
