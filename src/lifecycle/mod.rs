//! Orchestration layer: wires the actor, store writer, and notification
//! dispatcher together and manages their lifetimes.

pub mod kitchen_system;
pub mod tracing;

pub use kitchen_system::KitchenSystem;
pub use self::tracing::setup_tracing;
