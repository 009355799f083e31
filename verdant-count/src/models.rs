use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Count status in the reconciliation lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountStatus {
    Pending,
    Completed,
    Discrepancy,
}

/// One expected-vs-actual reconciliation record for a bin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryCount {
    pub id: Uuid,
    pub bin_id: Uuid,
    /// Snapshot of the bin occupancy at creation time
    pub expected_count: i32,
    /// Detector-supplied value, taken as-is; zero until resolved
    pub actual_count: i32,
    pub status: CountStatus,
    pub created_at: DateTime<Utc>,
}

impl InventoryCount {
    pub fn new(bin_id: Uuid, expected_count: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            bin_id,
            expected_count,
            actual_count: 0,
            status: CountStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Transition: Pending → Completed when actual matches expected,
    /// Pending → Discrepancy otherwise. Resolved records are never reopened.
    pub fn resolve(&mut self, actual_count: i32) {
        self.actual_count = actual_count;
        self.status = if actual_count == self.expected_count {
            CountStatus::Completed
        } else {
            CountStatus::Discrepancy
        };
    }

    pub fn is_pending(&self) -> bool {
        self.status == CountStatus::Pending
    }
}
