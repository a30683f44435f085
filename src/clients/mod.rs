//! Typed client facade over the board actor's message channel.
//!
//! The presentation layer never sees raw message passing; it calls
//! [`BoardClient`] methods and gets plain results back.

pub mod board_client;

pub use board_client::*;
