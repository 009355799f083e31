use std::collections::HashMap;
use uuid::Uuid;

use crate::bin::StorageBin;
use crate::product::{Product, ProductCategory};

/// In-memory store for products and storage bins, scoped to one session.
///
/// Lookups go through the maps; the id lists keep insertion order so the
/// presentation layer renders collections in the order they were added.
pub struct CatalogStore {
    products: HashMap<Uuid, Product>,
    bins: HashMap<Uuid, StorageBin>,
    product_order: Vec<Uuid>,
    bin_order: Vec<Uuid>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            bins: HashMap::new(),
            product_order: Vec::new(),
            bin_order: Vec::new(),
        }
    }

    /// Register a new product, initially unassigned.
    /// Duplicate SKUs are permitted by design.
    pub fn add_product(
        &mut self,
        sku: String,
        name: String,
        category: ProductCategory,
        strain: String,
    ) -> Product {
        let product = Product::new(sku, name, category, strain);
        self.products.insert(product.id, product.clone());
        self.product_order.push(product.id);
        product
    }

    /// Register a new storage bin with an advisory capacity
    pub fn add_bin(
        &mut self,
        code: String,
        location: String,
        capacity: u32,
    ) -> Result<StorageBin, CatalogError> {
        if capacity == 0 {
            return Err(CatalogError::InvalidCapacity(capacity));
        }

        let bin = StorageBin::new(code, location, capacity);
        self.bins.insert(bin.id, bin.clone());
        self.bin_order.push(bin.id);
        Ok(bin)
    }

    pub fn product(&self, product_id: &Uuid) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub fn bin(&self, bin_id: &Uuid) -> Option<&StorageBin> {
        self.bins.get(bin_id)
    }

    /// Products in insertion order
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.product_order
            .iter()
            .filter_map(|id| self.products.get(id))
    }

    /// Bins in insertion order
    pub fn bins(&self) -> impl Iterator<Item = &StorageBin> {
        self.bin_order.iter().filter_map(|id| self.bins.get(id))
    }

    /// Assign a product to a bin, or unassign it with `None`.
    ///
    /// Reassigning a product to the bin it already occupies is a no-op, and a
    /// missing target bin aborts before any state is touched, so the
    /// product/bin references stay consistent in both directions.
    pub fn assign_product(
        &mut self,
        product_id: &Uuid,
        new_bin: Option<Uuid>,
    ) -> Result<(), CatalogError> {
        let current_bin = self
            .products
            .get(product_id)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))?
            .current_bin;

        if current_bin == new_bin {
            return Ok(());
        }

        if let Some(target) = new_bin {
            if !self.bins.contains_key(&target) {
                return Err(CatalogError::BinNotFound(target.to_string()));
            }
        }

        if let Some(old_bin_id) = current_bin {
            if let Some(old_bin) = self.bins.get_mut(&old_bin_id) {
                old_bin.remove_product(product_id);
            }
        }

        if let Some(target) = new_bin {
            if let Some(bin) = self.bins.get_mut(&target) {
                bin.push_product(*product_id);
            }
        }

        if let Some(product) = self.products.get_mut(product_id) {
            product.current_bin = new_bin;
        }

        Ok(())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Bin not found: {0}")]
    BinNotFound(String),

    #[error("Bin capacity must be positive, got {0}")]
    InvalidCapacity(u32),
}
