//! Derives the grouped, sorted display view from the order collection.

use serde::{Deserialize, Serialize};

use crate::model::{Order, Status};

/// How each status group is ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Preserve collection order (insertion is most-recent-first).
    None,
    /// Descending priority weight; ties keep collection order.
    Priority,
    /// Ascending ETA; ties keep collection order.
    Eta,
}

/// The three status groups, each holding the matching subset of the
/// collection in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub queued: Vec<Order>,
    pub in_progress: Vec<Order>,
    pub ready: Vec<Order>,
}

/// Groups `orders` by status and sorts each group independently.
///
/// Sorting never crosses groups, and ties always preserve relative
/// collection order (`sort_by_key` is stable). The input is not mutated.
pub fn project(orders: &[Order], sort: SortMode) -> Projection {
    let select = |status: Status| {
        let mut group: Vec<Order> = orders
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect();
        match sort {
            SortMode::None => {}
            SortMode::Priority => {
                group.sort_by_key(|o| std::cmp::Reverse(o.priority.weight()))
            }
            SortMode::Eta => group.sort_by_key(|o| o.eta_minutes),
        }
        group
    };

    Projection {
        queued: select(Status::Queued),
        in_progress: select(Status::InProgress),
        ready: select(Status::Ready),
    }
}
