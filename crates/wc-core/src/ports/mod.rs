//! Port interfaces for the application layer.
//!
//! Ports define the contract between the view-model and infrastructure
//! implementations, keeping the reconciliation logic independent of any
//! concrete storage backend or HTTP stack.

pub mod catalog_lookup;
pub mod clock;
pub mod errors;
pub mod inventory_store;
pub mod photo_store;

pub use catalog_lookup::CatalogLookupPort;
pub use clock::ClockPort;
pub use errors::{CatalogLookupError, InventoryStoreError, PhotoUploadError};
pub use inventory_store::InventoryStorePort;
pub use photo_store::PhotoStorePort;
