//! Adapter construction from [`AppConfig`].
//!
//! A shell picks one inventory variant (SQLite backend or local JSON blob)
//! and hands the resulting ports to `wc-app`'s builder.

use std::sync::Arc;

use anyhow::Result;

use wc_core::ports::{CatalogLookupPort, InventoryStorePort, PhotoStorePort};
use wc_core::AppConfig;

use crate::catalog::HttpCatalogClient;
use crate::db::{init_db_pool, DieselInventoryStore};
use crate::localstore::JsonFileInventoryStore;
use crate::photos::FsPhotoStore;
use crate::SystemClock;

pub fn sqlite_inventory_store(config: &AppConfig) -> Result<Arc<dyn InventoryStorePort>> {
    let pool = init_db_pool(&config.database_path.to_string_lossy())?;
    Ok(Arc::new(DieselInventoryStore::new(pool)))
}

pub async fn local_inventory_store(config: &AppConfig) -> Result<Arc<dyn InventoryStorePort>> {
    let store = JsonFileInventoryStore::load(config.local_store_path.clone()).await?;
    Ok(Arc::new(store))
}

pub fn catalog_lookup(config: &AppConfig) -> Arc<dyn CatalogLookupPort> {
    Arc::new(HttpCatalogClient::new(config.catalog_endpoint.clone()))
}

pub fn photo_store(config: &AppConfig) -> Arc<dyn PhotoStorePort> {
    Arc::new(FsPhotoStore::new(
        config.photo_root.clone(),
        config.photo_public_base.clone(),
        SystemClock,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wc_core::wine::NewWineRecord;

    fn test_config(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::defaults();
        config.database_path = dir.path().join("cellar.db");
        config.local_store_path = dir.path().join("wines.json");
        config.photo_root = dir.path().join("photos");
        config
    }

    fn new_record(name: &str) -> NewWineRecord {
        NewWineRecord {
            name: name.to_string(),
            grape: None,
            country: None,
            vintage: None,
            location: None,
            quantity: 1,
            price: None,
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn sqlite_variant_assembles_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = sqlite_inventory_store(&test_config(&dir)).unwrap();

        store.insert(new_record("Syrah")).await.unwrap();
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn local_variant_assembles_and_persists() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let store = local_inventory_store(&config).await.unwrap();

        store.insert(new_record("Gamay")).await.unwrap();
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
        assert!(config.local_store_path.exists());
    }
}
