//! The [`Order`] entity and its supporting value types.
//!
//! # Immutability by Convention
//! An `Order` is never mutated in place once it enters the collection. Every
//! state change replaces the whole record with a new one (see
//! [`crate::engine`]), so readers always observe a fully-formed snapshot.

use serde::{Deserialize, Serialize};

/// Minimum estimated preparation time. Draft inputs below this are clamped,
/// never rejected.
pub const MIN_ETA_MINUTES: u32 = 1;

/// How urgently the kitchen should treat an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort weight used by the priority sort mode (higher cooks first).
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Pizza size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// Crust style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crust {
    Thin,
    Regular,
    DeepDish,
}

/// How the order leaves the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    DineIn,
    Takeout,
    Delivery,
}

/// Position in the forward-only order lifecycle.
///
/// Transitions only ever move `Queued → InProgress → Ready`. `Ready` is
/// terminal: advancing past it is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Queued,
    InProgress,
    Ready,
}

impl Status {
    /// The next lifecycle stage. `Ready` maps to itself.
    pub fn next(&self) -> Status {
        match self {
            Status::Queued => Status::InProgress,
            Status::InProgress => Status::Ready,
            Status::Ready => Status::Ready,
        }
    }
}

/// A single customer order tracked through its kitchen lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, assigned once at creation and never reused.
    pub id: String,
    pub priority: Priority,
    pub size: Size,
    pub crust: Crust,
    /// Free-text modifications, order preserved. May be empty.
    pub modifications: Vec<String>,
    /// Free-text line items, order preserved. May be empty; presentation
    /// decides how to render an empty list.
    pub items: Vec<String>,
    pub service_type: ServiceType,
    /// Estimated minutes to ready. Always `>= MIN_ETA_MINUTES`.
    pub eta_minutes: u32,
    pub status: Status,
}

/// Payload for creating a new order. The id and status are assigned by the
/// engine, never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub priority: Priority,
    pub size: Size,
    pub crust: Crust,
    pub modifications: Vec<String>,
    pub items: Vec<String>,
    pub service_type: ServiceType,
    pub eta_minutes: u32,
}

impl Order {
    /// Builds a new `Order` from a draft.
    ///
    /// The order starts `Queued` and a non-positive ETA is clamped to
    /// [`MIN_ETA_MINUTES`]. This constructor never fails; invalid draft
    /// input is normalized rather than rejected.
    pub fn from_draft(id: impl Into<String>, draft: OrderDraft) -> Self {
        Self {
            id: id.into(),
            priority: draft.priority,
            size: draft.size,
            crust: draft.crust,
            modifications: draft.modifications,
            items: draft.items,
            service_type: draft.service_type,
            eta_minutes: draft.eta_minutes.max(MIN_ETA_MINUTES),
            status: Status::Queued,
        }
    }
}

/// The built-in demo collection used when the store yields no usable data.
pub fn default_seed() -> Vec<Order> {
    vec![
        Order {
            id: "order_1".to_string(),
            priority: Priority::High,
            size: Size::Large,
            crust: Crust::Thin,
            modifications: vec!["Extra Cheese".to_string(), "No Onions".to_string()],
            items: vec!["Pepperoni".to_string(), "Mushrooms".to_string()],
            service_type: ServiceType::DineIn,
            eta_minutes: 15,
            status: Status::Queued,
        },
        Order {
            id: "order_2".to_string(),
            priority: Priority::Medium,
            size: Size::Medium,
            crust: Crust::Regular,
            modifications: vec![],
            items: vec!["Margherita".to_string()],
            service_type: ServiceType::Takeout,
            eta_minutes: 20,
            status: Status::Queued,
        },
        Order {
            id: "order_3".to_string(),
            priority: Priority::Low,
            size: Size::Small,
            crust: Crust::DeepDish,
            modifications: vec!["Light Sauce".to_string()],
            items: vec![],
            service_type: ServiceType::Delivery,
            eta_minutes: 30,
            status: Status::Queued,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            priority: Priority::Medium,
            size: Size::Large,
            crust: Crust::Thin,
            modifications: vec!["No Onions".to_string()],
            items: vec!["Pepperoni".to_string()],
            service_type: ServiceType::DineIn,
            eta_minutes: 15,
        }
    }

    #[test]
    fn from_draft_starts_queued() {
        let order = Order::from_draft("order_9", draft());
        assert_eq!(order.id, "order_9");
        assert_eq!(order.status, Status::Queued);
        assert_eq!(order.eta_minutes, 15);
    }

    #[test]
    fn from_draft_clamps_zero_eta() {
        let mut d = draft();
        d.eta_minutes = 0;
        let order = Order::from_draft("order_9", d);
        assert_eq!(order.eta_minutes, MIN_ETA_MINUTES);
    }

    #[test]
    fn status_only_moves_forward() {
        assert_eq!(Status::Queued.next(), Status::InProgress);
        assert_eq!(Status::InProgress.next(), Status::Ready);
        assert_eq!(Status::Ready.next(), Status::Ready);
    }

    #[test]
    fn seed_has_unique_ids_and_valid_etas() {
        let seed = default_seed();
        assert_eq!(seed.len(), 3);
        for (i, order) in seed.iter().enumerate() {
            assert!(order.eta_minutes >= MIN_ETA_MINUTES);
            assert_eq!(order.status, Status::Queued);
            assert!(seed.iter().skip(i + 1).all(|o| o.id != order.id));
        }
    }

    #[test]
    fn order_round_trips_through_json() {
        let order = Order::from_draft("order_1", draft());
        let bytes = serde_json::to_vec(&order).unwrap();
        let back: Order = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, order);
    }
}
