//! State-machine transitions over the order collection.
//!
//! The collection is replaced wholesale on every command; individual orders
//! are never mutated in place. Relative order of untouched entries is always
//! preserved.

use crate::model::{Order, OrderDraft, Status};

/// Advances one order to its next lifecycle stage.
///
/// An unknown id is a silent no-op (the collection comes back unchanged),
/// and advancing a `Ready` order is idempotent. The second element is the
/// set of ids that entered `Ready` in this call: empty or a singleton.
pub fn advance(orders: &[Order], id: &str) -> (Vec<Order>, Vec<String>) {
    let mut readied = Vec::new();
    let next = orders
        .iter()
        .map(|order| {
            if order.id != id || order.status == Status::Ready {
                return order.clone();
            }
            let status = order.status.next();
            if status == Status::Ready {
                readied.push(order.id.clone());
            }
            Order {
                status,
                ..order.clone()
            }
        })
        .collect();
    (next, readied)
}

/// Moves every `Queued` order to `InProgress` in a single atomic pass.
///
/// No order can reach `Ready` here, so there is nothing to notify.
pub fn start_all_queued(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .map(|order| match order.status {
            Status::Queued => Order {
                status: Status::InProgress,
                ..order.clone()
            },
            _ => order.clone(),
        })
        .collect()
}

/// Moves every `InProgress` order to `Ready` in a single atomic pass.
///
/// Returns the readied ids in original collection order; each must be
/// notified exactly once. Calling again immediately yields an empty set.
pub fn complete_all_in_progress(orders: &[Order]) -> (Vec<Order>, Vec<String>) {
    let mut readied = Vec::new();
    let next = orders
        .iter()
        .map(|order| match order.status {
            Status::InProgress => {
                readied.push(order.id.clone());
                Order {
                    status: Status::Ready,
                    ..order.clone()
                }
            }
            _ => order.clone(),
        })
        .collect();
    (next, readied)
}

/// Prepends a new `Queued` order built from `draft` under the given id.
///
/// Most-recent-first insertion order; display ordering is decided later by
/// the projector. The caller guarantees the id is fresh.
pub fn create(orders: &[Order], id: impl Into<String>, draft: OrderDraft) -> Vec<Order> {
    let mut next = Vec::with_capacity(orders.len() + 1);
    next.push(Order::from_draft(id, draft));
    next.extend(orders.iter().cloned());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Crust, Priority, ServiceType, Size};

    fn order(id: &str, status: Status) -> Order {
        Order {
            id: id.to_string(),
            priority: Priority::Medium,
            size: Size::Medium,
            crust: Crust::Regular,
            modifications: vec![],
            items: vec!["Margherita".to_string()],
            service_type: ServiceType::DineIn,
            eta_minutes: 10,
            status,
        }
    }

    fn draft(eta: u32) -> OrderDraft {
        OrderDraft {
            priority: Priority::High,
            size: Size::Large,
            crust: Crust::Thin,
            modifications: vec![],
            items: vec![],
            service_type: ServiceType::Takeout,
            eta_minutes: eta,
        }
    }

    #[test]
    fn advance_walks_the_full_lifecycle() {
        let orders = vec![order("order_1", Status::Queued)];

        let (orders, readied) = advance(&orders, "order_1");
        assert_eq!(orders[0].status, Status::InProgress);
        assert!(readied.is_empty());

        let (orders, readied) = advance(&orders, "order_1");
        assert_eq!(orders[0].status, Status::Ready);
        assert_eq!(readied, vec!["order_1".to_string()]);

        // Ready is terminal: advancing again changes nothing.
        let (same, readied) = advance(&orders, "order_1");
        assert_eq!(same, orders);
        assert!(readied.is_empty());
    }

    #[test]
    fn advance_unknown_id_is_a_no_op() {
        let orders = vec![order("order_1", Status::Queued)];
        let (next, readied) = advance(&orders, "order_99");
        assert_eq!(next, orders);
        assert!(readied.is_empty());
    }

    #[test]
    fn advance_leaves_other_orders_untouched() {
        let orders = vec![
            order("order_1", Status::Queued),
            order("order_2", Status::InProgress),
        ];
        let (next, _) = advance(&orders, "order_1");
        assert_eq!(next[0].status, Status::InProgress);
        assert_eq!(next[1], orders[1]);
    }

    #[test]
    fn start_all_queued_only_touches_queued() {
        let orders = vec![
            order("order_1", Status::Queued),
            order("order_2", Status::InProgress),
            order("order_3", Status::Ready),
            order("order_4", Status::Queued),
        ];
        let next = start_all_queued(&orders);
        assert_eq!(next[0].status, Status::InProgress);
        assert_eq!(next[1].status, Status::InProgress);
        assert_eq!(next[2].status, Status::Ready);
        assert_eq!(next[3].status, Status::InProgress);

        // Repeating with nothing queued is a no-op.
        assert_eq!(start_all_queued(&next), next);
    }

    #[test]
    fn complete_all_reports_readied_ids_in_collection_order() {
        let orders = vec![
            order("order_1", Status::InProgress),
            order("order_2", Status::Queued),
            order("order_3", Status::InProgress),
        ];
        let (next, readied) = complete_all_in_progress(&orders);
        assert_eq!(readied, vec!["order_1".to_string(), "order_3".to_string()]);
        assert_eq!(next[0].status, Status::Ready);
        assert_eq!(next[1].status, Status::Queued);
        assert_eq!(next[2].status, Status::Ready);

        let (again, readied) = complete_all_in_progress(&next);
        assert_eq!(again, next);
        assert!(readied.is_empty());
    }

    #[test]
    fn create_prepends_a_queued_order_with_clamped_eta() {
        let orders = vec![order("order_1", Status::Ready)];
        let next = create(&orders, "order_2", draft(0));
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, "order_2");
        assert_eq!(next[0].status, Status::Queued);
        assert_eq!(next[0].eta_minutes, 1);
        assert_eq!(next[1], orders[0]);
    }
}
