use async_trait::async_trait;
use diesel::prelude::*;

use wc_core::ports::{InventoryStoreError, InventoryStorePort};
use wc_core::wine::{NewWineRecord, WineRecord};
use wc_core::WineId;

use crate::db::{models::WineRow, pool::DbPool, schema::t_wine};

/// SQLite-backed inventory store.
///
/// Ids are assigned client-side at insert; the canonical record handed back
/// to the caller is the row read back from the database, not the input.
pub struct DieselInventoryStore {
    pool: DbPool,
}

impl DieselInventoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<
        diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>,
        InventoryStoreError,
    > {
        self.pool
            .get()
            .map_err(|e| InventoryStoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl InventoryStorePort for DieselInventoryStore {
    async fn fetch_all(&self) -> Result<Vec<WineRecord>, InventoryStoreError> {
        let mut conn = self.conn()?;

        let rows = t_wine::table
            .order((t_wine::created_at.asc(), t_wine::id.asc()))
            .load::<WineRow>(&mut conn)
            .map_err(|e| InventoryStoreError::Unavailable(e.to_string()))?;

        Ok(rows.into_iter().map(WineRecord::from).collect())
    }

    async fn insert(&self, record: NewWineRecord) -> Result<WineRecord, InventoryStoreError> {
        if !record.has_name() {
            return Err(InventoryStoreError::Validation("name is required".into()));
        }

        let mut conn = self.conn()?;

        let record_id = WineId::new();
        // Microsecond resolution keeps insertion order stable across rapid
        // sequential inserts.
        let row = WineRow::from_new(
            record,
            record_id.clone(),
            chrono::Utc::now().timestamp_micros(),
        );

        diesel::insert_into(t_wine::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| InventoryStoreError::Unavailable(e.to_string()))?;

        // Read the canonical row back rather than echoing the input.
        let persisted = t_wine::table
            .find(record_id.as_str())
            .first::<WineRow>(&mut conn)
            .map_err(|e| InventoryStoreError::Unavailable(e.to_string()))?;

        Ok(WineRecord::from(persisted))
    }

    async fn update_quantity(
        &self,
        wine_id: &WineId,
        new_quantity: u32,
    ) -> Result<(), InventoryStoreError> {
        let mut conn = self.conn()?;

        let affected = diesel::update(t_wine::table.find(wine_id.as_str()))
            .set(t_wine::quantity.eq(new_quantity as i32))
            .execute(&mut conn)
            .map_err(|e| InventoryStoreError::Unavailable(e.to_string()))?;

        if affected == 0 {
            return Err(InventoryStoreError::NotFound(wine_id.to_string()));
        }

        Ok(())
    }
}
