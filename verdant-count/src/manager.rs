use uuid::Uuid;
use verdant_catalog::StorageBin;

use crate::models::InventoryCount;

/// Owns the count ledger and drives pending-count resolution.
///
/// The ledger is append-only and keeps insertion order: when several pending
/// counts exist for the same bin, the most recently opened one is the only
/// record eligible for resolution.
pub struct CountManager {
    counts: Vec<InventoryCount>,
}

impl CountManager {
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }

    /// Open a new pending count snapshotting the bin's current occupancy.
    /// Existing pending counts for the bin are not deduplicated.
    pub fn start_count(&mut self, bin: &StorageBin) -> InventoryCount {
        let count = InventoryCount::new(bin.id, bin.current_count as i32);
        self.counts.push(count.clone());
        count
    }

    /// Resolve the most recently opened pending count for a bin with the
    /// detector-supplied actual value. Nothing is mutated when no pending
    /// count exists.
    pub fn resolve_count(
        &mut self,
        bin_id: &Uuid,
        actual_count: i32,
    ) -> Result<InventoryCount, CountError> {
        let record = self
            .counts
            .iter_mut()
            .rev()
            .find(|c| c.bin_id == *bin_id && c.is_pending())
            .ok_or_else(|| CountError::NoPendingCount(bin_id.to_string()))?;

        record.resolve(actual_count);
        Ok(record.clone())
    }

    /// All count records in insertion order
    pub fn counts(&self) -> &[InventoryCount] {
        &self.counts
    }

    pub fn counts_for_bin(&self, bin_id: Uuid) -> impl Iterator<Item = &InventoryCount> {
        self.counts.iter().filter(move |c| c.bin_id == bin_id)
    }

    /// The count that would be resolved next for this bin, if any
    pub fn pending_count(&self, bin_id: &Uuid) -> Option<&InventoryCount> {
        self.counts
            .iter()
            .rev()
            .find(|c| c.bin_id == *bin_id && c.is_pending())
    }
}

impl Default for CountManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CountError {
    #[error("No pending inventory count for bin: {0}")]
    NoPendingCount(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountStatus;
    use verdant_catalog::{CatalogStore, ProductCategory};

    fn store_with_bin() -> (CatalogStore, Uuid) {
        let mut store = CatalogStore::new();
        let bin = store
            .add_bin("B1".to_string(), "Aisle 1".to_string(), 50)
            .unwrap();
        (store, bin.id)
    }

    fn assign_new_product(store: &mut CatalogStore, bin_id: Uuid) -> Uuid {
        let product_id = store
            .add_product(
                "SKU-001".to_string(),
                "Blue Dream 3.5g".to_string(),
                ProductCategory::Flower,
                "Blue Dream".to_string(),
            )
            .id;
        store.assign_product(&product_id, Some(bin_id)).unwrap();
        product_id
    }

    #[test]
    fn test_count_on_empty_bin_expects_zero() {
        let (store, bin_id) = store_with_bin();
        let mut manager = CountManager::new();

        let count = manager.start_count(store.bin(&bin_id).unwrap());
        assert_eq!(count.expected_count, 0);
        assert_eq!(count.status, CountStatus::Pending);
    }

    #[test]
    fn test_count_snapshots_occupancy() {
        let (mut store, bin_id) = store_with_bin();
        assign_new_product(&mut store, bin_id);
        let mut manager = CountManager::new();

        let count = manager.start_count(store.bin(&bin_id).unwrap());
        assert_eq!(count.expected_count, 1);

        // Later assignments must not move an existing snapshot
        assign_new_product(&mut store, bin_id);
        assert_eq!(manager.counts()[0].expected_count, 1);
    }

    #[test]
    fn test_resolve_matching_count_completes() {
        let (mut store, bin_id) = store_with_bin();
        assign_new_product(&mut store, bin_id);
        let mut manager = CountManager::new();
        manager.start_count(store.bin(&bin_id).unwrap());

        let resolved = manager.resolve_count(&bin_id, 1).unwrap();
        assert_eq!(resolved.status, CountStatus::Completed);
        assert_eq!(resolved.actual_count, 1);
    }

    #[test]
    fn test_resolve_mismatch_flags_discrepancy() {
        let (mut store, bin_id) = store_with_bin();
        assign_new_product(&mut store, bin_id);
        let mut manager = CountManager::new();
        manager.start_count(store.bin(&bin_id).unwrap());

        let resolved = manager.resolve_count(&bin_id, 3).unwrap();
        assert_eq!(resolved.status, CountStatus::Discrepancy);
        assert_eq!(resolved.actual_count, 3);
    }

    #[test]
    fn test_resolve_without_pending_count_fails() {
        let (store, bin_id) = store_with_bin();
        let mut manager = CountManager::new();
        manager.start_count(store.bin(&bin_id).unwrap());
        manager.resolve_count(&bin_id, 0).unwrap();

        let result = manager.resolve_count(&bin_id, 5);
        assert!(matches!(result, Err(CountError::NoPendingCount(_))));

        // The already-resolved record is terminal and must stay untouched
        assert_eq!(manager.counts().len(), 1);
        assert_eq!(manager.counts()[0].status, CountStatus::Completed);
        assert_eq!(manager.counts()[0].actual_count, 0);
    }

    #[test]
    fn test_latest_pending_count_wins() {
        let (mut store, bin_id) = store_with_bin();
        let mut manager = CountManager::new();

        manager.start_count(store.bin(&bin_id).unwrap());
        assign_new_product(&mut store, bin_id);
        let second = manager.start_count(store.bin(&bin_id).unwrap());

        let resolved = manager.resolve_count(&bin_id, 1).unwrap();
        assert_eq!(resolved.id, second.id);
        assert_eq!(resolved.status, CountStatus::Completed);

        // The superseded record stays pending and is next in line
        assert_eq!(manager.counts()[0].status, CountStatus::Pending);
        let next = manager.pending_count(&bin_id).map(|c| c.id);
        assert_eq!(next, Some(manager.counts()[0].id));
    }

    #[test]
    fn test_counts_for_bin_filters_ledger() {
        let (mut store, first_bin) = store_with_bin();
        let second_bin = store
            .add_bin("B2".to_string(), "Aisle 2".to_string(), 20)
            .unwrap()
            .id;
        let mut manager = CountManager::new();

        manager.start_count(store.bin(&first_bin).unwrap());
        manager.start_count(store.bin(&second_bin).unwrap());
        manager.start_count(store.bin(&first_bin).unwrap());

        assert_eq!(manager.counts_for_bin(first_bin).count(), 2);
        assert_eq!(manager.counts_for_bin(second_bin).count(), 1);
        assert_eq!(manager.counts().len(), 3);
    }
}
