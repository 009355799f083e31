pub mod models;
pub mod manager;

pub use models::{CountStatus, InventoryCount};
pub use manager::{CountError, CountManager};
