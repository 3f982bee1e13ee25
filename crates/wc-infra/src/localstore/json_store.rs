use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use wc_core::ports::{InventoryStoreError, InventoryStorePort};
use wc_core::wine::{NewWineRecord, WineRecord};
use wc_core::WineId;

/// Local-storage inventory variant: one JSON blob under a fixed file name,
/// loaded once at startup and rewritten on every collection mutation.
///
/// The blob write and the in-process copy update happen under one lock, so
/// a mutation is visible to readers only once it is durable. Observable
/// semantics match the backend store minus the network failure modes.
pub struct JsonFileInventoryStore {
    path: PathBuf,
    records: Mutex<Vec<WineRecord>>,
}

impl JsonFileInventoryStore {
    /// Read the blob if it exists; a missing file is an empty cellar.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("corrupt inventory blob at {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read inventory blob at {}", path.display())
                })
            }
        };
        debug!(path = %path.display(), count = records.len(), "loaded inventory blob");
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    async fn persist(&self, records: &[WineRecord]) -> Result<(), InventoryStoreError> {
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| InventoryStoreError::Unavailable(e.to_string()))?;
        fs::write(&self.path, bytes)
            .await
            .map_err(|e| InventoryStoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl InventoryStorePort for JsonFileInventoryStore {
    async fn fetch_all(&self) -> Result<Vec<WineRecord>, InventoryStoreError> {
        Ok(self.records.lock().await.clone())
    }

    async fn insert(&self, record: NewWineRecord) -> Result<WineRecord, InventoryStoreError> {
        if !record.has_name() {
            return Err(InventoryStoreError::Validation("name is required".into()));
        }

        let mut records = self.records.lock().await;
        let persisted = record.into_record(WineId::new());

        // Write first, then expose: the in-process copy only reflects
        // durable state.
        let mut next = records.clone();
        next.push(persisted.clone());
        self.persist(&next).await?;
        *records = next;

        Ok(persisted)
    }

    async fn update_quantity(
        &self,
        wine_id: &WineId,
        new_quantity: u32,
    ) -> Result<(), InventoryStoreError> {
        let mut records = self.records.lock().await;
        let index = records
            .iter()
            .position(|r| &r.id == wine_id)
            .ok_or_else(|| InventoryStoreError::NotFound(wine_id.to_string()))?;

        let mut next = records.clone();
        next[index].quantity = new_quantity;
        self.persist(&next).await?;
        *records = next;

        Ok(())
    }
}
