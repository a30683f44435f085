//! Pure data structures (DTOs) for the kitchen order domain.
//!
//! Everything here is plain data: no channels, no I/O, no async. The live
//! collection of [`Order`]s is owned by the [`crate::board`] actor and
//! transformed by the pure functions in [`crate::engine`].

pub mod order;

pub use order::*;
