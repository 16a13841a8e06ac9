//! Id-based deduplication of paginated order history
//!
//! [`OrderHistoryPaginator::fetch`](crate::pagination::OrderHistoryPaginator::fetch)
//! can return an order twice when it is stamped exactly at a split
//! midpoint. Callers that need each order once run the result through
//! [`dedup_by_order_id`].

use cryptocom_types::OrderHistoryEntry;
use std::collections::HashSet;

/// Remove repeated orders, keeping the first occurrence of each `order_id`
///
/// Relative order of the remaining entries is unchanged.
pub fn dedup_by_order_id(orders: Vec<OrderHistoryEntry>) -> Vec<OrderHistoryEntry> {
    let mut seen = HashSet::with_capacity(orders.len());
    orders
        .into_iter()
        .filter(|order| seen.insert(order.order_id.clone()))
        .collect()
}
