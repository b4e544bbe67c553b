//! Per-order serialization of read-check-write sequences.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use fieldops_domain::id::OrderId;

/// Registry of one async mutex per work order.
///
/// Holding the guard returned by [`OrderLocks::acquire`] across the order
/// read, the gate decision and the write keeps concurrent mutations of the
/// same order from interleaving. Different orders never contend.
#[derive(Clone, Default)]
pub struct OrderLocks {
    inner: Arc<Mutex<HashMap<OrderId, Arc<AsyncMutex<()>>>>>,
}

impl OrderLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, order_id: OrderId) -> OwnedMutexGuard<()> {
        let slot = {
            let mut map = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            // Slots nobody holds or waits on are only referenced by the map.
            map.retain(|_, slot| Arc::strong_count(slot) > 1);
            map.entry(order_id).or_default().clone()
        };
        slot.lock_owned().await
    }

    /// Number of orders with a live lock slot.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
