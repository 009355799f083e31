pub mod product;
pub mod bin;
pub mod store;

pub use product::{Product, ProductCategory};
pub use bin::StorageBin;
pub use store::{CatalogError, CatalogStore};
