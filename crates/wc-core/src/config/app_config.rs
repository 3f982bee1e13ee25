use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration DTO (pure data, no logic).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// SQLite database path (path info only, no existence check).
    pub database_path: PathBuf,

    /// JSON blob path for the local-storage inventory variant.
    pub local_store_path: PathBuf,

    /// Read-only catalog endpoint returning the full JSON array.
    pub catalog_endpoint: String,

    /// Directory the photo store writes under.
    pub photo_root: PathBuf,

    /// Base URL photos are publicly resolvable from.
    pub photo_public_base: String,
}

impl AppConfig {
    pub fn defaults() -> Self {
        Self {
            database_path: PathBuf::from("winecellar.db"),
            local_store_path: PathBuf::from("wines.json"),
            catalog_endpoint: "https://api.sampleapis.com/wines/reds".to_string(),
            photo_root: PathBuf::from("photos"),
            photo_public_base: "file://photos".to_string(),
        }
    }
}
