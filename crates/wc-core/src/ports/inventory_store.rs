use async_trait::async_trait;
use std::sync::Arc;

use crate::ids::WineId;
use crate::ports::errors::InventoryStoreError;
use crate::wine::{NewWineRecord, WineRecord};

/// Durable home of the wine collection; the source of truth on (re)load.
///
/// Contract notes:
/// - `fetch_all` returns records in insertion order (backend-defined order
///   is acceptable).
/// - `insert` returns the canonical persisted copy, which the view-model
///   merges in instead of the draft it sent.
/// - `update_quantity` touches the quantity field and nothing else.
#[async_trait]
pub trait InventoryStorePort: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<WineRecord>, InventoryStoreError>;

    async fn insert(&self, record: NewWineRecord) -> Result<WineRecord, InventoryStoreError>;

    async fn update_quantity(
        &self,
        id: &WineId,
        new_quantity: u32,
    ) -> Result<(), InventoryStoreError>;
}

#[async_trait]
impl<T: InventoryStorePort + ?Sized> InventoryStorePort for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<WineRecord>, InventoryStoreError> {
        (**self).fetch_all().await
    }

    async fn insert(&self, record: NewWineRecord) -> Result<WineRecord, InventoryStoreError> {
        (**self).insert(record).await
    }

    async fn update_quantity(
        &self,
        id: &WineId,
        new_quantity: u32,
    ) -> Result<(), InventoryStoreError> {
        (**self).update_quantity(id, new_quantity).await
    }
}
