use std::sync::Arc;

use wc_core::ports::{CatalogLookupPort, InventoryStorePort, PhotoStorePort};

use crate::view_model::CellarViewModel;

/// Builder for assembling the cellar view-model from ports.
///
/// The inventory store decides the persistence variant (SQLite backend or
/// the local JSON blob); the view-model's observable behavior is the same
/// either way.
pub struct AppBuilder {
    inventory: Option<Arc<dyn InventoryStorePort>>,
    catalog: Option<Arc<dyn CatalogLookupPort>>,
    photos: Option<Arc<dyn PhotoStorePort>>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            inventory: None,
            catalog: None,
            photos: None,
        }
    }

    pub fn with_inventory_store(mut self, inventory: Arc<dyn InventoryStorePort>) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_catalog_lookup(mut self, catalog: Arc<dyn CatalogLookupPort>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_photo_store(mut self, photos: Arc<dyn PhotoStorePort>) -> Self {
        self.photos = Some(photos);
        self
    }

    pub fn build(self) -> anyhow::Result<CellarViewModel> {
        let inventory = self
            .inventory
            .ok_or_else(|| anyhow::anyhow!("InventoryStorePort is required"))?;
        let catalog = self
            .catalog
            .ok_or_else(|| anyhow::anyhow!("CatalogLookupPort is required"))?;
        let photos = self
            .photos
            .ok_or_else(|| anyhow::anyhow!("PhotoStorePort is required"))?;
        Ok(CellarViewModel::new(inventory, catalog, photos))
    }
}
