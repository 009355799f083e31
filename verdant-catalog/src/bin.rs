use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A physical storage location holding zero or more products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageBin {
    pub id: Uuid,
    pub code: String,
    pub location: String,
    /// Advisory limit, never enforced as a hard cap
    pub capacity: u32,
    /// Always equals `products.len()`
    pub current_count: u32,
    pub products: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl StorageBin {
    pub fn new(code: String, location: String, capacity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            location,
            capacity,
            current_count: 0,
            products: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Current occupancy against the advisory capacity, for display
    pub fn occupancy(&self) -> (u32, u32) {
        (self.current_count, self.capacity)
    }

    pub fn holds(&self, product_id: &Uuid) -> bool {
        self.products.contains(product_id)
    }

    pub(crate) fn push_product(&mut self, product_id: Uuid) {
        self.products.push(product_id);
        self.current_count += 1;
    }

    /// Removal tolerates an id that is already absent; the counter only moves
    /// when an entry actually left the list.
    pub(crate) fn remove_product(&mut self, product_id: &Uuid) {
        if let Some(pos) = self.products.iter().position(|id| id == product_id) {
            self.products.remove(pos);
            self.current_count = self.current_count.saturating_sub(1);
        }
    }
}
