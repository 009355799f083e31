use tracing::info;
use uuid::Uuid;

use verdant_catalog::{CatalogError, CatalogStore, Product, ProductCategory, StorageBin};
use verdant_count::{CountError, CountManager, InventoryCount};
use verdant_vision::{DetectionError, ObjectDetector};

/// Application state for one logical session.
///
/// Owns every collection; created when the session starts and dropped when it
/// ends. One session mutates this at a time. Embeddings that serve several
/// sessions concurrently must put the whole state behind a single lock, since
/// the operations themselves take no locks.
pub struct SessionState {
    catalog: CatalogStore,
    counts: CountManager,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            catalog: CatalogStore::new(),
            counts: CountManager::new(),
        }
    }

    /// Read-only view for the presentation layer
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Read-only view of the count ledger
    pub fn counts(&self) -> &CountManager {
        &self.counts
    }

    pub fn add_product(
        &mut self,
        sku: String,
        name: String,
        category: ProductCategory,
        strain: String,
    ) -> Product {
        let product = self.catalog.add_product(sku, name, category, strain);
        info!("Product {} added (SKU {})", product.id, product.sku);
        product
    }

    pub fn add_bin(
        &mut self,
        code: String,
        location: String,
        capacity: u32,
    ) -> Result<StorageBin, SessionError> {
        let bin = self.catalog.add_bin(code, location, capacity)?;
        info!("Bin {} added at {}", bin.code, bin.location);
        Ok(bin)
    }

    pub fn assign_product(
        &mut self,
        product_id: &Uuid,
        new_bin: Option<Uuid>,
    ) -> Result<(), SessionError> {
        self.catalog.assign_product(product_id, new_bin)?;
        match new_bin {
            Some(bin_id) => info!("Product {} assigned to bin {}", product_id, bin_id),
            None => info!("Product {} unassigned", product_id),
        }
        Ok(())
    }

    /// Open a pending count snapshotting the bin's current occupancy
    pub fn start_count(&mut self, bin_id: &Uuid) -> Result<InventoryCount, SessionError> {
        let bin = self
            .catalog
            .bin(bin_id)
            .ok_or_else(|| CatalogError::BinNotFound(bin_id.to_string()))?;
        let count = self.counts.start_count(bin);
        info!("Inventory count {} started for bin {}", count.id, bin.code);
        Ok(count)
    }

    /// Resolve the latest pending count for a bin with a known actual value
    pub fn resolve_count(
        &mut self,
        bin_id: &Uuid,
        actual_count: i32,
    ) -> Result<InventoryCount, SessionError> {
        let record = self.counts.resolve_count(bin_id, actual_count)?;
        info!(
            "Inventory count {} resolved: expected {}, actual {}, status {:?}",
            record.id, record.expected_count, record.actual_count, record.status
        );
        Ok(record)
    }

    /// Run detection over a bin image and resolve the latest pending count
    /// with the detected total.
    ///
    /// A detector failure propagates before any count record is touched.
    pub async fn count_from_image(
        &mut self,
        bin_id: &Uuid,
        image_bytes: &[u8],
        detector: &dyn ObjectDetector,
    ) -> Result<ImageCountOutcome, SessionError> {
        if self.catalog.bin(bin_id).is_none() {
            return Err(CatalogError::BinNotFound(bin_id.to_string()).into());
        }

        let detection = detector.detect(image_bytes).await?;
        let record = self.resolve_count(bin_id, detection.count as i32)?;

        Ok(ImageCountOutcome {
            record,
            annotated_image: detection.annotated_image,
        })
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the presentation layer renders after an image-driven count
#[derive(Debug, Clone)]
pub struct ImageCountOutcome {
    pub record: InventoryCount,
    pub annotated_image: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Count error: {0}")]
    Count(#[from] CountError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),
}
