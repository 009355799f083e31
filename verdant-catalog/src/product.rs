use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product categories in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Flower,
    Edibles,
    Concentrates,
}

/// A product tracked across storage bins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub category: ProductCategory,
    pub strain: String,
    pub unit_type: String,
    pub thc_content: String,
    pub cbd_content: String,
    pub current_bin: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(sku: String, name: String, category: ProductCategory, strain: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku,
            name,
            category,
            strain,
            unit_type: String::new(),
            thc_content: String::new(),
            cbd_content: String::new(),
            current_bin: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the product currently sits in a bin
    pub fn is_assigned(&self) -> bool {
        self.current_bin.is_some()
    }
}
